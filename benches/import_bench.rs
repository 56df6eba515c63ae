//! Parse and import throughput on synthetic chains.
#![allow(missing_docs)]

use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use molimport::elements::{ElementTable, RadiusType};
use molimport::importer::Importer;
use molimport::options::{ImportOptions, StickStyle};
use molimport::pdb::PdbStructure;
use molimport::sink::RecordingSink;

/// Zig-zag carbon chain with one CONECT record per atom.
fn synthetic_chain(atoms: usize) -> String {
    let mut text = String::new();
    for i in 0..atoms {
        let x = i as f32 * 1.25;
        let y = if i % 2 == 0 { 0.0 } else { 0.85 };
        let _ = writeln!(
            text,
            "HETATM{:>5}  C   LIG A   1    {x:8.3}{y:8.3}{:8.3}  1.00  0.00           C",
            i + 1,
            0.0
        );
    }
    for i in 1..atoms {
        let _ = writeln!(text, "CONECT{i:>5}{:>5}", i + 1);
    }
    text.push_str("END\n");
    text
}

fn parse_benchmark(c: &mut Criterion) {
    let table = ElementTable::default_table();
    let mut group = c.benchmark_group("parse");
    for count in [100, 1_000, 10_000] {
        let text = synthetic_chain(count);
        let _ = group.bench_function(format!("{count}_atoms"), |b| {
            b.iter(|| {
                black_box(PdbStructure::parse(
                    black_box(&text),
                    table,
                    RadiusType::Used,
                    true,
                    false,
                ))
            });
        });
    }
    group.finish();
}

fn import_benchmark(c: &mut Criterion) {
    let table = ElementTable::default_table();
    let text = synthetic_chain(2_000);
    let mut group = c.benchmark_group("import_2000_atoms");
    for style in
        [StickStyle::Dupliverts, StickStyle::Skin, StickStyle::Cylinders]
    {
        let mut options = ImportOptions::default();
        options.sticks.style = style;
        let Ok(importer) = Importer::new(table, options) else {
            continue;
        };
        let _ = group.bench_function(format!("{style:?}"), |b| {
            b.iter(|| {
                let mut sink = RecordingSink::new();
                black_box(importer.import_str(black_box(&text), &mut sink))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, parse_benchmark, import_benchmark);
criterion_main!(benches);
