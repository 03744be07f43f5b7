//! Extraction benchmarks.
//!
//! Benchmarks: parse + extract over synthetic articles of growing size, and
//! a batch run over on-disk papers.
//! Run with: cargo bench -p flyhelper-analysis --bench extraction_bench

use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flyhelper_analysis::{
    extract, DictionaryScorer, ExceptionSet, ExtractOptions, GeneDictionary, GeneFinder,
    LazyExceptions, MetricFlags, Paper, Scorer,
};
use flyhelper_core::config::{BoundaryRule, SnippetMode};
use tempfile::TempDir;

const FORMS: [&str; 8] = ["wg", "wingless", "Notch", "Dll", "UAS-wg", "hh", "en", "ptc"];

fn dictionary() -> GeneDictionary {
    FORMS
        .iter()
        .enumerate()
        .map(|(i, form)| (*form, format!("FBgn{:07}", i % 5)))
        .collect()
}

fn exceptions() -> ExceptionSet {
    ExceptionSet::from_entries(["UAS", "GAL4"], BoundaryRule::Legacy)
}

/// Article with `sections` sections of ten paragraphs each.
fn sample_article(sections: usize) -> String {
    let mut xml = String::from("<article><front><abstract><p>Abstract.</p></abstract></front><body>");
    for s in 0..sections {
        xml.push_str("<sec><title>Section</title>");
        for p in 0..10 {
            let form = FORMS[(s * 10 + p) % FORMS.len()];
            xml.push_str(&format!(
                "<p>Paragraph {p} shows <italic>{form}</italic> acting with \
                 <italic>Drosophila</italic> tissue and <bold>growth</bold> factors.</p>"
            ));
        }
        xml.push_str("</sec>");
    }
    xml.push_str("</body></article>");
    xml
}

fn extraction_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    group.sample_size(20);

    let dictionary = dictionary();
    let exceptions = exceptions();
    for sections in [10, 100, 500] {
        let xml = sample_article(sections);

        group.bench_with_input(BenchmarkId::new("parse", sections), &xml, |b, xml| {
            b.iter(|| Paper::new("bench", xml.clone()).unwrap());
        });

        let paper = Paper::new("bench", xml).unwrap();
        for mode in [SnippetMode::None, SnippetMode::Short, SnippetMode::Long] {
            let options = ExtractOptions::new(mode, true);
            group.bench_with_input(
                BenchmarkId::new(format!("extract_{mode}"), sections),
                &paper,
                |b, paper| {
                    b.iter(|| extract(paper.document(), &dictionary, &exceptions, &options));
                },
            );
        }
    }
    group.finish();
}

fn batch_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    let dir = TempDir::new().unwrap();
    let paths: Vec<PathBuf> = (0..200)
        .map(|i| {
            let path = dir.path().join(format!("PMC{i:07}.nxml"));
            std::fs::write(&path, sample_article(20)).unwrap();
            path
        })
        .collect();

    let scorer = Scorer::Dictionary(DictionaryScorer::new(
        ExtractOptions::new(SnippetMode::Short, true),
        MetricFlags::all(),
    ));
    let finder = GeneFinder::new(dictionary(), LazyExceptions::preloaded(exceptions()), scorer);

    group.bench_function("analyze_batch_200", |b| {
        b.iter(|| finder.analyze_batch(&paths));
    });
    group.finish();
}

criterion_group!(benches, extraction_by_size, batch_run);
criterion_main!(benches);
