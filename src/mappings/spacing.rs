pub(super) const CLASSES: &[(&str, &str)] = &[
    ("p-0", "no padding"),
    ("m-0", "no margin"),
    ("gap-0", "no gap"),
    ("space-x-reverse", "reversed horizontal spacing order"),
    ("space-y-reverse", "reversed vertical spacing order"),
];
