pub(super) const CLASSES: &[(&str, &str)] = &[
    ("fill-none", "no fill"),
    ("fill-current", "fill in current color"),
    ("stroke-none", "no stroke"),
    ("stroke-current", "stroke in current color"),
];
