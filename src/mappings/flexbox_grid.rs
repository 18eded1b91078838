pub(super) const CLASSES: &[(&str, &str)] = &[
    ("flex", "flexbox container"),
    ("inline-flex", "inline flexbox container"),
    ("flex-row", "horizontal flex direction"),
    ("flex-row-reverse", "reversed horizontal flex direction"),
    ("flex-col", "vertical flex direction (column)"),
    ("flex-col-reverse", "reversed vertical flex direction"),
    ("flex-wrap", "flex items wrap"),
    ("flex-wrap-reverse", "flex items wrap in reverse"),
    ("flex-nowrap", "flex items do not wrap"),
    ("flex-1", "grows and shrinks as needed (flex 1)"),
    ("flex-auto", "grows and shrinks from its size (flex auto)"),
    ("flex-initial", "shrinks but does not grow (flex initial)"),
    ("flex-none", "fixed size (flex none)"),
    ("grow", "grows to fill space"),
    ("grow-0", "does not grow"),
    ("shrink", "shrinks when needed"),
    ("shrink-0", "does not shrink"),
    ("flex-grow", "grows to fill space"),
    ("flex-grow-0", "does not grow"),
    ("flex-shrink", "shrinks when needed"),
    ("flex-shrink-0", "does not shrink"),
    ("basis-auto", "automatic flex basis"),
    ("basis-full", "full flex basis (100%)"),
    ("order-first", "ordered first"),
    ("order-last", "ordered last"),
    ("order-none", "default order"),
    ("grid", "grid container"),
    ("inline-grid", "inline grid container"),
    ("grid-cols-none", "no grid columns template"),
    ("grid-cols-subgrid", "columns from parent grid (subgrid)"),
    ("grid-rows-none", "no grid rows template"),
    ("grid-rows-subgrid", "rows from parent grid (subgrid)"),
    ("grid-flow-row", "grid fills by row"),
    ("grid-flow-col", "grid fills by column"),
    ("grid-flow-dense", "dense grid packing"),
    ("grid-flow-row-dense", "grid fills by row, densely"),
    ("grid-flow-col-dense", "grid fills by column, densely"),
    ("col-auto", "automatic grid column"),
    ("col-span-full", "spans all columns"),
    ("col-start-auto", "automatic column start"),
    ("col-end-auto", "automatic column end"),
    ("row-auto", "automatic grid row"),
    ("row-span-full", "spans all rows"),
    ("row-start-auto", "automatic row start"),
    ("row-end-auto", "automatic row end"),
    ("auto-cols-auto", "implicit columns sized automatically"),
    ("auto-cols-min", "implicit columns at min-content"),
    ("auto-cols-max", "implicit columns at max-content"),
    ("auto-cols-fr", "implicit columns share space equally"),
    ("auto-rows-auto", "implicit rows sized automatically"),
    ("auto-rows-min", "implicit rows at min-content"),
    ("auto-rows-max", "implicit rows at max-content"),
    ("auto-rows-fr", "implicit rows share space equally"),
    ("justify-start", "items packed to start"),
    ("justify-end", "items packed to end"),
    ("justify-center", "items centered horizontally"),
    ("justify-between", "space between items"),
    ("justify-around", "space around items"),
    ("justify-evenly", "space evenly between items"),
    ("justify-stretch", "items stretched along main axis"),
    ("justify-normal", "default justification"),
    ("justify-items-start", "grid items aligned to start"),
    ("justify-items-end", "grid items aligned to end"),
    ("justify-items-center", "grid items centered"),
    ("justify-items-stretch", "grid items stretched"),
    ("justify-items-normal", "default item justification"),
    ("justify-self-auto", "automatic self justification"),
    ("justify-self-start", "justified to start"),
    ("justify-self-end", "justified to end"),
    ("justify-self-center", "justified to center"),
    ("justify-self-stretch", "stretched horizontally"),
    ("content-normal", "default content alignment"),
    ("content-start", "lines packed to start"),
    ("content-end", "lines packed to end"),
    ("content-center", "lines centered"),
    ("content-between", "space between lines"),
    ("content-around", "space around lines"),
    ("content-evenly", "space evenly between lines"),
    ("content-stretch", "lines stretched"),
    ("content-baseline", "lines aligned to baseline"),
    ("items-start", "items aligned to start"),
    ("items-end", "items aligned to end"),
    ("items-center", "items centered vertically"),
    ("items-baseline", "items aligned to baseline"),
    ("items-stretch", "items stretched to fill"),
    ("self-auto", "automatic self alignment"),
    ("self-start", "aligned to start"),
    ("self-end", "aligned to end"),
    ("self-center", "centered on cross axis"),
    ("self-stretch", "stretched on cross axis"),
    ("self-baseline", "aligned to baseline"),
    ("place-content-center", "content placed at center"),
    ("place-content-start", "content placed at start"),
    ("place-content-end", "content placed at end"),
    ("place-content-between", "content placed with space between"),
    ("place-content-around", "content placed with space around"),
    ("place-content-evenly", "content placed with even space"),
    ("place-content-stretch", "content stretched"),
    ("place-items-center", "items placed at center"),
    ("place-items-start", "items placed at start"),
    ("place-items-end", "items placed at end"),
    ("place-items-stretch", "items stretched"),
    ("place-items-baseline", "items placed at baseline"),
    ("place-self-auto", "automatic self placement"),
    ("place-self-center", "placed at center"),
    ("place-self-start", "placed at start"),
    ("place-self-end", "placed at end"),
    ("place-self-stretch", "stretched in place"),
];
