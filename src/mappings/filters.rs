pub(super) const CLASSES: &[(&str, &str)] = &[
    ("filter", "filters enabled"),
    ("filter-none", "no filters"),
    ("blur", "blurred (8px)"),
    ("blur-none", "no blur"),
    ("blur-xs", "extra slight blur (4px)"),
    ("blur-sm", "slight blur"),
    ("blur-md", "medium blur (12px)"),
    ("blur-lg", "large blur (16px)"),
    ("blur-xl", "extra large blur (24px)"),
    ("blur-2xl", "2x large blur (40px)"),
    ("blur-3xl", "3x large blur (64px)"),
    ("grayscale", "grayscale"),
    ("grayscale-0", "no grayscale"),
    ("invert", "inverted colors"),
    ("invert-0", "no color inversion"),
    ("sepia", "sepia tone"),
    ("sepia-0", "no sepia"),
    ("drop-shadow", "drop shadow filter"),
    ("drop-shadow-xs", "extra small drop shadow filter"),
    ("drop-shadow-sm", "small drop shadow filter"),
    ("drop-shadow-md", "medium drop shadow filter"),
    ("drop-shadow-lg", "large drop shadow filter"),
    ("drop-shadow-xl", "extra large drop shadow filter"),
    ("drop-shadow-2xl", "2x large drop shadow filter"),
    ("drop-shadow-none", "no drop shadow filter"),
    ("backdrop-filter", "backdrop filters enabled"),
    ("backdrop-filter-none", "no backdrop filters"),
    ("backdrop-blur", "blurred backdrop (8px)"),
    ("backdrop-blur-none", "no backdrop blur"),
    ("backdrop-blur-xs", "extra slight backdrop blur (4px)"),
    ("backdrop-blur-sm", "slight backdrop blur"),
    ("backdrop-blur-md", "medium backdrop blur (12px)"),
    ("backdrop-blur-lg", "large backdrop blur (16px)"),
    ("backdrop-blur-xl", "extra large backdrop blur (24px)"),
    ("backdrop-blur-2xl", "2x large backdrop blur (40px)"),
    ("backdrop-blur-3xl", "3x large backdrop blur (64px)"),
    ("backdrop-grayscale", "grayscale backdrop"),
    ("backdrop-invert", "inverted backdrop"),
    ("backdrop-sepia", "sepia backdrop"),
];
