pub(super) const CLASSES: &[(&str, &str)] = &[
    ("font-sans", "sans-serif font"),
    ("font-serif", "serif font"),
    ("font-mono", "monospace font"),
    ("font-thin", "thin text (100)"),
    ("font-extralight", "extra light text (200)"),
    ("font-light", "light text (300)"),
    ("font-normal", "normal weight text (400)"),
    ("font-medium", "medium weight text (500)"),
    ("font-semibold", "semibold text (600)"),
    ("font-bold", "bold text (700)"),
    ("font-extrabold", "extra bold text (800)"),
    ("font-black", "heaviest text (900)"),
    ("text-xs", "extra small text (0.75rem)"),
    ("text-sm", "small text (0.875rem)"),
    ("text-base", "base text size (1rem)"),
    ("text-lg", "large text (1.125rem)"),
    ("text-xl", "extra large text (1.25rem)"),
    ("text-2xl", "2x large text (1.5rem)"),
    ("text-3xl", "3x large text (1.875rem)"),
    ("text-4xl", "4x large text (2.25rem)"),
    ("text-5xl", "5x large text (3rem)"),
    ("text-6xl", "6x large text (3.75rem)"),
    ("text-7xl", "7x large text (4.5rem)"),
    ("text-8xl", "8x large text (6rem)"),
    ("text-9xl", "9x large text (8rem)"),
    ("text-left", "left-aligned text"),
    ("text-center", "centered text"),
    ("text-right", "right-aligned text"),
    ("text-justify", "justified text"),
    ("text-start", "text aligned to start"),
    ("text-end", "text aligned to end"),
    ("text-wrap", "wrapping text"),
    ("text-nowrap", "non-wrapping text"),
    ("text-balance", "balanced text wrapping"),
    ("text-pretty", "pretty text wrapping (no orphans)"),
    ("text-ellipsis", "overflowing text ends with ellipsis"),
    ("text-clip", "overflowing text clipped"),
    ("italic", "italic text"),
    ("not-italic", "upright text"),
    ("antialiased", "grayscale font smoothing"),
    ("subpixel-antialiased", "subpixel font smoothing"),
    ("underline", "underlined text"),
    ("overline", "overlined text"),
    ("line-through", "strikethrough text"),
    ("no-underline", "no text decoration"),
    ("uppercase", "uppercase text"),
    ("lowercase", "lowercase text"),
    ("capitalize", "capitalized words"),
    ("normal-case", "original text case"),
    ("truncate", "single line truncated with ellipsis"),
    ("leading-none", "line height 1"),
    ("leading-tight", "tight line height (1.25)"),
    ("leading-snug", "snug line height (1.375)"),
    ("leading-normal", "normal line height (1.5)"),
    ("leading-relaxed", "relaxed line height (1.625)"),
    ("leading-loose", "loose line height (2)"),
    ("tracking-tighter", "tighter letter spacing (-0.05em)"),
    ("tracking-tight", "tight letter spacing (-0.025em)"),
    ("tracking-normal", "normal letter spacing"),
    ("tracking-wide", "wide letter spacing (0.025em)"),
    ("tracking-wider", "wider letter spacing (0.05em)"),
    ("tracking-widest", "widest letter spacing (0.1em)"),
    ("whitespace-normal", "normal whitespace"),
    ("whitespace-nowrap", "no line wrapping"),
    ("whitespace-pre", "preserved whitespace"),
    ("whitespace-pre-line", "preserved line breaks"),
    ("whitespace-pre-wrap", "preserved whitespace with wrapping"),
    ("whitespace-break-spaces", "preserved whitespace, breaks at spaces"),
    ("break-normal", "normal word breaking"),
    ("break-words", "long words break"),
    ("break-all", "breaks anywhere"),
    ("break-keep", "no breaks in CJK text"),
    ("wrap-break-word", "long words wrap"),
    ("wrap-anywhere", "wraps anywhere"),
    ("wrap-normal", "normal wrapping"),
    ("hyphens-none", "no hyphenation"),
    ("hyphens-manual", "manual hyphenation"),
    ("hyphens-auto", "automatic hyphenation"),
    ("list-none", "no list markers"),
    ("list-disc", "bulleted list"),
    ("list-decimal", "numbered list"),
    ("list-inside", "list markers inside"),
    ("list-outside", "list markers outside"),
    ("align-baseline", "vertically aligned to baseline"),
    ("align-top", "vertically aligned to top"),
    ("align-middle", "vertically aligned to middle"),
    ("align-bottom", "vertically aligned to bottom"),
    ("align-text-top", "vertically aligned to text top"),
    ("align-text-bottom", "vertically aligned to text bottom"),
    ("align-sub", "subscript alignment"),
    ("align-super", "superscript alignment"),
    ("decoration-solid", "solid text decoration"),
    ("decoration-double", "double text decoration"),
    ("decoration-dotted", "dotted text decoration"),
    ("decoration-dashed", "dashed text decoration"),
    ("decoration-wavy", "wavy text decoration"),
    ("decoration-auto", "automatic decoration thickness"),
    ("decoration-from-font", "decoration thickness from font"),
    ("underline-offset-auto", "automatic underline offset"),
    ("content-none", "no generated content"),
    ("normal-nums", "normal numerals"),
    ("ordinal", "ordinal markers"),
    ("slashed-zero", "slashed zero"),
    ("lining-nums", "lining numerals"),
    ("oldstyle-nums", "old-style numerals"),
    ("proportional-nums", "proportional numerals"),
    ("tabular-nums", "fixed-width numerals"),
    ("diagonal-fractions", "diagonal fractions"),
    ("stacked-fractions", "stacked fractions"),
    ("line-clamp-none", "no line clamping"),
];
