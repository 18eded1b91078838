pub(super) const CLASSES: &[(&str, &str)] = &[
    ("sr-only", "visually hidden (screen reader only)"),
    ("not-sr-only", "visible to everyone (undoes sr-only)"),
    ("forced-color-adjust-auto", "adjusts to forced colors"),
    ("forced-color-adjust-none", "ignores forced colors"),
];
