pub(super) const CLASSES: &[(&str, &str)] = &[
    ("transition", "smooth transition"),
    ("transition-all", "transition all properties"),
    ("transition-colors", "transition colors"),
    ("transition-opacity", "transition opacity"),
    ("transition-shadow", "transition shadow"),
    ("transition-transform", "transition transform"),
    ("transition-none", "no transition"),
    ("transition-discrete", "discrete property transitions"),
    ("transition-normal", "normal property transitions"),
    ("ease-linear", "linear easing"),
    ("ease-in", "ease-in timing"),
    ("ease-out", "ease-out timing"),
    ("ease-in-out", "ease-in-out timing"),
    ("ease-initial", "initial easing"),
    ("animate-spin", "spinning animation"),
    ("animate-ping", "ping animation"),
    ("animate-pulse", "pulsing animation"),
    ("animate-bounce", "bouncing animation"),
    ("animate-none", "no animation"),
];
