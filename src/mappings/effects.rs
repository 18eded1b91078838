pub(super) const CLASSES: &[(&str, &str)] = &[
    ("shadow", "small drop shadow"),
    ("shadow-2xs", "tiniest drop shadow"),
    ("shadow-xs", "extra small drop shadow"),
    ("shadow-sm", "subtle drop shadow"),
    ("shadow-md", "medium drop shadow"),
    ("shadow-lg", "large drop shadow"),
    ("shadow-xl", "extra large drop shadow"),
    ("shadow-2xl", "2x large drop shadow"),
    ("shadow-inner", "inner shadow"),
    ("shadow-none", "no shadow"),
    ("inset-shadow-2xs", "tiniest inset shadow"),
    ("inset-shadow-xs", "extra small inset shadow"),
    ("inset-shadow-sm", "small inset shadow"),
    ("inset-shadow-none", "no inset shadow"),
    ("text-shadow-2xs", "tiniest text shadow"),
    ("text-shadow-xs", "extra small text shadow"),
    ("text-shadow-sm", "small text shadow"),
    ("text-shadow-md", "medium text shadow"),
    ("text-shadow-lg", "large text shadow"),
    ("text-shadow-none", "no text shadow"),
    ("opacity-0", "fully transparent"),
    ("opacity-100", "fully opaque"),
    ("mix-blend-normal", "normal blending"),
    ("mix-blend-multiply", "multiply blending"),
    ("mix-blend-screen", "screen blending"),
    ("mix-blend-overlay", "overlay blending"),
    ("mix-blend-darken", "darken blending"),
    ("mix-blend-lighten", "lighten blending"),
    ("mix-blend-color-dodge", "color dodge blending"),
    ("mix-blend-color-burn", "color burn blending"),
    ("mix-blend-hard-light", "hard light blending"),
    ("mix-blend-soft-light", "soft light blending"),
    ("mix-blend-difference", "difference blending"),
    ("mix-blend-exclusion", "exclusion blending"),
    ("mix-blend-hue", "hue blending"),
    ("mix-blend-saturation", "saturation blending"),
    ("mix-blend-color", "color blending"),
    ("mix-blend-luminosity", "luminosity blending"),
    ("mix-blend-plus-darker", "plus-darker blending"),
    ("mix-blend-plus-lighter", "plus-lighter blending"),
    ("bg-blend-normal", "normal background blending"),
    ("bg-blend-multiply", "multiply background blending"),
    ("bg-blend-screen", "screen background blending"),
    ("bg-blend-overlay", "overlay background blending"),
    ("bg-blend-darken", "darken background blending"),
    ("bg-blend-lighten", "lighten background blending"),
    ("bg-blend-color-dodge", "color dodge background blending"),
    ("bg-blend-color-burn", "color burn background blending"),
    ("bg-blend-hard-light", "hard light background blending"),
    ("bg-blend-soft-light", "soft light background blending"),
    ("bg-blend-difference", "difference background blending"),
    ("bg-blend-exclusion", "exclusion background blending"),
    ("bg-blend-hue", "hue background blending"),
    ("bg-blend-saturation", "saturation background blending"),
    ("bg-blend-color", "color background blending"),
    ("bg-blend-luminosity", "luminosity background blending"),
];
