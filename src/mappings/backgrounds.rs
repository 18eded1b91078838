pub(super) const CLASSES: &[(&str, &str)] = &[
    ("bg-fixed", "fixed background (does not scroll)"),
    ("bg-local", "background scrolls with content"),
    ("bg-scroll", "background scrolls with element"),
    ("bg-clip-border", "background extends under border"),
    ("bg-clip-padding", "background clipped to padding"),
    ("bg-clip-content", "background clipped to content"),
    ("bg-clip-text", "background clipped to text"),
    ("bg-origin-border", "background positioned from border"),
    ("bg-origin-padding", "background positioned from padding"),
    ("bg-origin-content", "background positioned from content"),
    ("bg-repeat", "repeating background"),
    ("bg-no-repeat", "non-repeating background"),
    ("bg-repeat-x", "background repeats horizontally"),
    ("bg-repeat-y", "background repeats vertically"),
    ("bg-repeat-round", "background repeats without clipping (round)"),
    ("bg-repeat-space", "background repeats with spacing"),
    ("bg-auto", "background at natural size"),
    ("bg-cover", "background covers element"),
    ("bg-contain", "background fits inside element"),
    ("bg-center", "background centered"),
    ("bg-top", "background at top"),
    ("bg-bottom", "background at bottom"),
    ("bg-left", "background at left"),
    ("bg-right", "background at right"),
    ("bg-left-top", "background at top left"),
    ("bg-left-bottom", "background at bottom left"),
    ("bg-right-top", "background at top right"),
    ("bg-right-bottom", "background at bottom right"),
    ("bg-none", "no background image"),
    ("bg-gradient-to-t", "gradient to top"),
    ("bg-gradient-to-tr", "gradient to top right"),
    ("bg-gradient-to-r", "gradient to right"),
    ("bg-gradient-to-br", "gradient to bottom right"),
    ("bg-gradient-to-b", "gradient to bottom"),
    ("bg-gradient-to-bl", "gradient to bottom left"),
    ("bg-gradient-to-l", "gradient to left"),
    ("bg-gradient-to-tl", "gradient to top left"),
    ("bg-radial", "radial gradient"),
    ("bg-conic", "conic gradient"),
];
