pub(super) const CLASSES: &[(&str, &str)] = &[
    ("w-full", "full width"),
    ("w-screen", "full viewport width"),
    ("w-auto", "automatic width"),
    ("w-min", "min-content width"),
    ("w-max", "max-content width"),
    ("w-fit", "fit-content width"),
    ("w-dvw", "full dynamic viewport width"),
    ("w-svw", "full small viewport width"),
    ("w-lvw", "full large viewport width"),
    ("h-full", "full height"),
    ("h-screen", "full viewport height"),
    ("h-auto", "automatic height"),
    ("h-min", "min-content height"),
    ("h-max", "max-content height"),
    ("h-fit", "fit-content height"),
    ("h-dvh", "full dynamic viewport height"),
    ("h-svh", "full small viewport height"),
    ("h-lvh", "full large viewport height"),
    ("size-full", "full width and height"),
    ("size-auto", "automatic width and height"),
    ("size-min", "min-content width and height"),
    ("size-max", "max-content width and height"),
    ("size-fit", "fit-content width and height"),
    ("min-w-0", "no minimum width"),
    ("min-w-full", "minimum full width"),
    ("min-w-min", "minimum min-content width"),
    ("min-w-max", "minimum max-content width"),
    ("min-w-fit", "minimum fit-content width"),
    ("max-w-none", "no maximum width"),
    ("max-w-3xs", "max width 16rem"),
    ("max-w-2xs", "max width 18rem"),
    ("max-w-xs", "max width 20rem"),
    ("max-w-sm", "max width 24rem"),
    ("max-w-md", "max width 28rem"),
    ("max-w-lg", "max width 32rem"),
    ("max-w-xl", "max width 36rem"),
    ("max-w-2xl", "max width 42rem"),
    ("max-w-3xl", "max width 48rem"),
    ("max-w-4xl", "max width 56rem"),
    ("max-w-5xl", "max width 64rem"),
    ("max-w-6xl", "max width 72rem"),
    ("max-w-7xl", "max width 80rem"),
    ("max-w-full", "maximum full width"),
    ("max-w-min", "maximum min-content width"),
    ("max-w-max", "maximum max-content width"),
    ("max-w-fit", "maximum fit-content width"),
    ("max-w-prose", "max width for readable prose (65ch)"),
    ("max-w-screen-sm", "max width 640px"),
    ("max-w-screen-md", "max width 768px"),
    ("max-w-screen-lg", "max width 1024px"),
    ("max-w-screen-xl", "max width 1280px"),
    ("max-w-screen-2xl", "max width 1536px"),
    ("min-h-0", "no minimum height"),
    ("min-h-full", "minimum full height"),
    ("min-h-screen", "at least full viewport height"),
    ("min-h-dvh", "at least full dynamic viewport height"),
    ("min-h-svh", "at least full small viewport height"),
    ("min-h-fit", "minimum fit-content height"),
    ("max-h-none", "no maximum height"),
    ("max-h-full", "maximum full height"),
    ("max-h-screen", "at most full viewport height"),
    ("max-h-dvh", "at most full dynamic viewport height"),
    ("max-h-fit", "maximum fit-content height"),
];
