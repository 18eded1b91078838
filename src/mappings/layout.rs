pub(super) const CLASSES: &[(&str, &str)] = &[
    ("container", "responsive fixed-width container"),
    ("block", "block element"),
    ("inline-block", "inline block element"),
    ("inline", "inline element"),
    ("hidden", "hidden (display none)"),
    ("contents", "display contents (box removed)"),
    ("flow-root", "flow root (new block formatting context)"),
    ("list-item", "list item display"),
    ("float-left", "floated left"),
    ("float-right", "floated right"),
    ("float-start", "floated to inline start"),
    ("float-end", "floated to inline end"),
    ("float-none", "not floated"),
    ("clear-left", "clears left floats"),
    ("clear-right", "clears right floats"),
    ("clear-both", "clears all floats"),
    ("clear-start", "clears inline-start floats"),
    ("clear-end", "clears inline-end floats"),
    ("clear-none", "does not clear floats"),
    ("isolate", "isolated stacking context"),
    ("isolation-auto", "automatic isolation"),
    ("object-contain", "content scaled to fit (contain)"),
    ("object-cover", "content covers box (cover)"),
    ("object-fill", "content stretched to fill"),
    ("object-none", "content at natural size"),
    ("object-scale-down", "content scaled down to fit"),
    ("object-center", "content centered"),
    ("object-top", "content aligned top"),
    ("object-bottom", "content aligned bottom"),
    ("object-left", "content aligned left"),
    ("object-right", "content aligned right"),
    ("object-left-top", "content aligned top left"),
    ("object-left-bottom", "content aligned bottom left"),
    ("object-right-top", "content aligned top right"),
    ("object-right-bottom", "content aligned bottom right"),
    ("overflow-auto", "scrollbars when needed"),
    ("overflow-hidden", "overflow hidden"),
    ("overflow-clip", "overflow clipped"),
    ("overflow-visible", "overflow visible"),
    ("overflow-scroll", "always scrollable"),
    ("overflow-x-auto", "horizontal scrollbar when needed"),
    ("overflow-x-hidden", "horizontal overflow hidden"),
    ("overflow-x-clip", "horizontal overflow clipped"),
    ("overflow-x-visible", "horizontal overflow visible"),
    ("overflow-x-scroll", "always horizontally scrollable"),
    ("overflow-y-auto", "vertical scrollbar when needed"),
    ("overflow-y-hidden", "vertical overflow hidden"),
    ("overflow-y-clip", "vertical overflow clipped"),
    ("overflow-y-visible", "vertical overflow visible"),
    ("overflow-y-scroll", "always vertically scrollable"),
    ("overscroll-auto", "default overscroll behavior"),
    ("overscroll-contain", "overscroll contained"),
    ("overscroll-none", "no overscroll effects"),
    ("overscroll-x-auto", "default horizontal overscroll"),
    ("overscroll-x-contain", "horizontal overscroll contained"),
    ("overscroll-x-none", "no horizontal overscroll"),
    ("overscroll-y-auto", "default vertical overscroll"),
    ("overscroll-y-contain", "vertical overscroll contained"),
    ("overscroll-y-none", "no vertical overscroll"),
    ("visible", "visible"),
    ("invisible", "invisible (keeps space)"),
    ("collapse", "collapsed (visibility)"),
    ("box-border", "border-box sizing"),
    ("box-content", "content-box sizing"),
    ("box-decoration-clone", "decoration cloned across fragments"),
    ("box-decoration-slice", "decoration sliced across fragments"),
    ("break-after-auto", "automatic break after"),
    ("break-after-avoid", "avoid break after"),
    ("break-after-all", "break after (all)"),
    ("break-after-page", "page break after"),
    ("break-after-column", "column break after"),
    ("break-before-auto", "automatic break before"),
    ("break-before-avoid", "avoid break before"),
    ("break-before-page", "page break before"),
    ("break-before-column", "column break before"),
    ("break-inside-auto", "automatic break inside"),
    ("break-inside-avoid", "avoid break inside"),
    ("break-inside-avoid-page", "avoid page break inside"),
    ("break-inside-avoid-column", "avoid column break inside"),
    ("columns-auto", "automatic column count"),
    ("aspect-auto", "automatic aspect ratio"),
    ("aspect-square", "square aspect ratio (1:1)"),
    ("aspect-video", "video aspect ratio (16:9)"),
    ("m-auto", "centered with auto margins"),
    ("mx-auto", "horizontally centered"),
    ("my-auto", "vertically centered"),
];
