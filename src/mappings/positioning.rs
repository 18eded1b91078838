pub(super) const CLASSES: &[(&str, &str)] = &[
    ("static", "static position"),
    ("fixed", "fixed position"),
    ("absolute", "absolute position"),
    ("relative", "relative position"),
    ("sticky", "sticky position"),
    ("inset-0", "pinned to all edges"),
    ("inset-x-0", "pinned to left and right edges"),
    ("inset-y-0", "pinned to top and bottom edges"),
    ("inset-auto", "automatic inset"),
    ("top-0", "pinned to top"),
    ("right-0", "pinned to right"),
    ("bottom-0", "pinned to bottom"),
    ("left-0", "pinned to left"),
    ("start-0", "pinned to inline start"),
    ("end-0", "pinned to inline end"),
    ("top-auto", "automatic top offset"),
    ("right-auto", "automatic right offset"),
    ("bottom-auto", "automatic bottom offset"),
    ("left-auto", "automatic left offset"),
    ("z-auto", "automatic z-index"),
];
