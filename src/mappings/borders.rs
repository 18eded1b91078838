pub(super) const CLASSES: &[(&str, &str)] = &[
    ("border", "has border"),
    ("border-0", "no border"),
    ("border-t", "top border"),
    ("border-r", "right border"),
    ("border-b", "bottom border"),
    ("border-l", "left border"),
    ("border-x", "left and right borders"),
    ("border-y", "top and bottom borders"),
    ("border-s", "inline-start border"),
    ("border-e", "inline-end border"),
    ("border-solid", "solid border"),
    ("border-dashed", "dashed border"),
    ("border-dotted", "dotted border"),
    ("border-double", "double border"),
    ("border-hidden", "hidden border"),
    ("border-none", "no border style"),
    ("rounded", "rounded corners"),
    ("rounded-none", "square corners"),
    ("rounded-xs", "barely rounded corners"),
    ("rounded-sm", "slightly rounded corners"),
    ("rounded-md", "medium rounded corners"),
    ("rounded-lg", "large rounded corners"),
    ("rounded-xl", "extra large rounded corners"),
    ("rounded-2xl", "2x large rounded corners"),
    ("rounded-3xl", "3x large rounded corners"),
    ("rounded-4xl", "4x large rounded corners"),
    ("rounded-full", "fully rounded (pill/circle)"),
    ("divide-x", "vertical dividers between children"),
    ("divide-y", "horizontal dividers between children"),
    ("divide-x-reverse", "reversed vertical dividers"),
    ("divide-y-reverse", "reversed horizontal dividers"),
    ("divide-solid", "solid dividers"),
    ("divide-dashed", "dashed dividers"),
    ("divide-dotted", "dotted dividers"),
    ("divide-double", "double dividers"),
    ("divide-none", "no divider style"),
    ("outline", "has outline"),
    ("outline-none", "no outline"),
    ("outline-hidden", "outline hidden"),
    ("outline-solid", "solid outline"),
    ("outline-dashed", "dashed outline"),
    ("outline-dotted", "dotted outline"),
    ("outline-double", "double outline"),
    ("ring", "focus ring"),
    ("ring-0", "no ring"),
    ("ring-inset", "ring drawn inside"),
];
