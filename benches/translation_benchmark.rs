use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tailwind_translator::{
    extract, extract_all_class_names, process_source, DisplayArgs, DisplaySettings, ExtractArgs,
    Translator,
};

const CLASS_STRINGS: &[&str] = &[
    "flex flex-col items-center justify-center p-4 bg-blue-500 text-white rounded-lg shadow-md",
    "md:hover:bg-blue-600/50 focus:outline-none transition-all duration-300 ease-in-out",
    "grid grid-cols-3 gap-4 space-x-2 space-y-4 w-[calc(100%-2rem)] -translate-y-1/2",
    "group-hover/item:underline data-[state=open]:block supports-[display:grid]:grid tw\\:p-2!",
];

/// Component source with `components` copies of a mixed React block
fn component_source(components: usize) -> String {
    let mut content = String::from("import { cn } from '@/lib/utils';\n\n");
    for i in 0..components {
        content.push_str(&format!("export const Component{} = ({{ active, size }}) => (\n", i));
        content.push_str(&format!("  <div className=\"{}\">\n", CLASS_STRINGS[i % CLASS_STRINGS.len()]));
        content.push_str("    <span className={`text-sm ${active ? \"font-bold\" : \"font-normal\"}`} />\n");
        content.push_str("    <p className={size === \"sm\" ? \"text-sm\" : \"text-lg\"} />\n");
        content.push_str("    <button className={cn(\"px-4 py-2\", active && \"bg-blue-500\", { \"opacity-50\": !active })} />\n");
        content.push_str("  </div>\n);\n\n");
    }
    content
}

fn create_test_files(dir: &Path, count: usize) {
    let content = component_source(20);
    for i in 0..count {
        fs::write(dir.join(format!("test_file_{}.jsx", i)), &content).unwrap();
    }
}

fn benchmark_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");

    let flat: Translator = Translator::default();
    let grouped = Translator::new(DisplaySettings {
        group_by_category: true,
        show_category_emojis: true,
    });

    for (i, classes) in CLASS_STRINGS.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("flat", i), classes, |b, classes| {
            b.iter(|| flat.translate_classes(black_box(classes)))
        });
        group.bench_with_input(BenchmarkId::new("grouped", i), classes, |b, classes| {
            b.iter(|| grouped.translate_classes(black_box(classes)))
        });
    }

    group.finish();
}

fn benchmark_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("source");
    let translator: Translator = Translator::default();

    for components in [1, 10, 100].iter() {
        let source = component_source(*components);
        group.bench_with_input(BenchmarkId::new("extract", components), &source, |b, source| {
            b.iter(|| extract_all_class_names(black_box(source)))
        });
        group.bench_with_input(BenchmarkId::new("extract_and_translate", components), &source, |b, source| {
            b.iter(|| process_source(black_box(source), &translator))
        });
    }

    group.finish();
}

fn benchmark_parallel_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_scan");
    group.sample_size(10);

    let temp_dir = TempDir::new().unwrap();
    create_test_files(temp_dir.path(), 200);
    let rt = tokio::runtime::Runtime::new().unwrap();

    for threads in [1, 2, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::new("threads", threads), threads, |b, &threads| {
            b.iter(|| {
                let args = ExtractArgs {
                    input: vec![format!("{}/*.jsx", temp_dir.path().display())],
                    output: None,
                    verbose: true,
                    jobs: Some(threads),
                    exclude: vec![],
                    dry_run: true,
                    compact: false,
                    display: DisplayArgs::default(),
                };
                rt.block_on(async { extract(args).await.unwrap() })
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_translation, benchmark_source, benchmark_parallel_scan);
criterion_main!(benches);
