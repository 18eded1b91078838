pub(super) const CLASSES: &[(&str, &str)] = &[
    ("cursor-auto", "automatic cursor"),
    ("cursor-default", "default cursor"),
    ("cursor-pointer", "pointer cursor"),
    ("cursor-wait", "wait cursor"),
    ("cursor-text", "text cursor"),
    ("cursor-move", "move cursor"),
    ("cursor-help", "help cursor"),
    ("cursor-not-allowed", "not-allowed cursor"),
    ("cursor-none", "hidden cursor"),
    ("cursor-context-menu", "context-menu cursor"),
    ("cursor-progress", "progress cursor"),
    ("cursor-cell", "cell cursor"),
    ("cursor-crosshair", "crosshair cursor"),
    ("cursor-vertical-text", "vertical text cursor"),
    ("cursor-alias", "alias cursor"),
    ("cursor-copy", "copy cursor"),
    ("cursor-no-drop", "no-drop cursor"),
    ("cursor-grab", "grab cursor"),
    ("cursor-grabbing", "grabbing cursor"),
    ("cursor-all-scroll", "all-scroll cursor"),
    ("cursor-col-resize", "column resize cursor"),
    ("cursor-row-resize", "row resize cursor"),
    ("cursor-zoom-in", "zoom-in cursor"),
    ("cursor-zoom-out", "zoom-out cursor"),
    ("select-none", "text not selectable"),
    ("select-text", "text selectable"),
    ("select-all", "selects all on click"),
    ("select-auto", "automatic text selection"),
    ("resize-none", "not resizable"),
    ("resize", "resizable"),
    ("resize-x", "horizontally resizable"),
    ("resize-y", "vertically resizable"),
    ("scroll-auto", "instant scrolling"),
    ("scroll-smooth", "smooth scrolling"),
    ("snap-start", "snaps to start"),
    ("snap-end", "snaps to end"),
    ("snap-center", "snaps to center"),
    ("snap-align-none", "no snap alignment"),
    ("snap-normal", "can skip snap points"),
    ("snap-always", "stops at every snap point"),
    ("snap-none", "no scroll snapping"),
    ("snap-x", "horizontal scroll snapping"),
    ("snap-y", "vertical scroll snapping"),
    ("snap-both", "scroll snapping on both axes"),
    ("snap-mandatory", "mandatory scroll snapping"),
    ("snap-proximity", "proximity scroll snapping"),
    ("touch-auto", "default touch behavior"),
    ("touch-none", "no touch gestures"),
    ("touch-pan-x", "horizontal touch panning"),
    ("touch-pan-y", "vertical touch panning"),
    ("touch-pinch-zoom", "pinch zoom enabled"),
    ("touch-manipulation", "touch panning and zoom only"),
    ("pointer-events-none", "ignores pointer events"),
    ("pointer-events-auto", "receives pointer events"),
    ("appearance-none", "native styling removed"),
    ("appearance-auto", "native styling"),
    ("will-change-auto", "no rendering hint"),
    ("will-change-scroll", "optimized for scroll changes"),
    ("will-change-contents", "optimized for content changes"),
    ("will-change-transform", "optimized for transform changes"),
    ("scheme-normal", "normal color scheme"),
    ("scheme-light", "light color scheme"),
    ("scheme-dark", "dark color scheme"),
    ("scheme-light-dark", "light or dark color scheme"),
    ("field-sizing-content", "form field sized to content"),
    ("field-sizing-fixed", "form field fixed size"),
    ("group", "group container (for group-* variants)"),
    ("peer", "peer element (for peer-* variants)"),
];
