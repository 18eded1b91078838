pub(super) const CLASSES: &[(&str, &str)] = &[
    ("text-white", "white text"),
    ("text-black", "black text"),
    ("text-transparent", "transparent text"),
    ("text-current", "text in current color"),
    ("text-inherit", "inherited text color"),
    ("bg-white", "white background"),
    ("bg-black", "black background"),
    ("bg-transparent", "transparent background"),
    ("bg-current", "background in current color"),
    ("bg-inherit", "inherited background color"),
    ("accent-auto", "automatic accent color"),
];
