pub(super) const CLASSES: &[(&str, &str)] = &[
    ("transform", "transforms enabled"),
    ("transform-none", "no transform"),
    ("transform-gpu", "GPU-accelerated transforms"),
    ("transform-cpu", "CPU transforms"),
    ("transform-3d", "preserves 3D for children"),
    ("transform-flat", "flattens children into plane"),
    ("origin-center", "transform origin at center"),
    ("origin-top", "transform origin at top"),
    ("origin-top-right", "transform origin at top right"),
    ("origin-right", "transform origin at right"),
    ("origin-bottom-right", "transform origin at bottom right"),
    ("origin-bottom", "transform origin at bottom"),
    ("origin-bottom-left", "transform origin at bottom left"),
    ("origin-left", "transform origin at left"),
    ("origin-top-left", "transform origin at top left"),
    ("backface-visible", "back face visible"),
    ("backface-hidden", "back face hidden"),
    ("perspective-none", "no perspective"),
    ("perspective-dramatic", "dramatic perspective (100px)"),
    ("perspective-near", "near perspective (300px)"),
    ("perspective-normal", "normal perspective (500px)"),
    ("perspective-midrange", "midrange perspective (800px)"),
    ("perspective-distant", "distant perspective (1200px)"),
    ("scale-none", "no scaling"),
    ("rotate-none", "no rotation"),
    ("translate-none", "no translation"),
];
