use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BENCHMARKS: [&str; 6] = [
    "sqlite_insert",
    "json_parse_large_documents",
    "zstd_compress",
    "regex_match",
    "image_resize_bilinear",
    "http_router",
];

const METRICS: [&str; 3] = ["Runtime Improvement", "Memory Improvement", "Binary Size"];

const FLAG_SETS: [&str; 5] = ["-O2", "-O3", "-O3 -flto", "-Os", "-O3 -march=native"];

/// Random value in `[lo, hi)` rounded to two decimals.
fn sample(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
    (rng.gen_range(lo..hi) * 100.0).round() / 100.0
}

fn write_csv(path: &Path, rows: &[(String, Vec<f64>)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    let mut header = vec!["benchmark"];
    header.extend(METRICS);
    writer.write_record(&header)?;
    for (name, values) in rows {
        let mut record = vec![name.clone()];
        record.extend(values.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[(String, Vec<f64>)]) -> Result<()> {
    let mut fields = vec![Field::new("benchmark", DataType::Utf8, false)];
    fields.extend(METRICS.iter().map(|m| Field::new(*m, DataType::Float64, false)));
    let schema = Arc::new(Schema::new(fields));

    let mut columns: Vec<Arc<dyn arrow::array::Array>> = vec![Arc::new(StringArray::from(
        rows.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(),
    ))];
    for m in 0..METRICS.len() {
        columns.push(Arc::new(Float64Array::from(
            rows.iter().map(|(_, v)| v[m]).collect::<Vec<_>>(),
        )));
    }

    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;
    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn write_log(path: &Path, rng: &mut StdRng) -> Result<()> {
    let mut text = String::new();
    for flags in FLAG_SETS {
        let time = sample(rng, 0.5, 4.0);
        let improvement = sample(rng, -0.1, 0.4);
        writeln!(text, "{flags},{time}s,{improvement}")?;
    }
    // One broken line to exercise the malformed-line path.
    writeln!(text, "-Ofast,2.1s")?;
    std::fs::write(path, text).context("writing benchmark log")?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));
    std::fs::create_dir_all(&out_dir).context("creating output directory")?;

    let mut rng = StdRng::seed_from_u64(42);

    let rows: Vec<(String, Vec<f64>)> = BENCHMARKS
        .iter()
        .map(|name| {
            let values = vec![
                sample(&mut rng, -5.0, 25.0),
                sample(&mut rng, -10.0, 15.0),
                sample(&mut rng, 0.0, 8.0),
            ];
            (name.to_string(), values)
        })
        .collect();

    let csv_path = out_dir.join("data.csv");
    let parquet_path = out_dir.join("data.parquet");
    let log_path = out_dir.join("benchmark.log");

    write_csv(&csv_path, &rows)?;
    write_parquet(&parquet_path, &rows)?;
    write_log(&log_path, &mut rng)?;

    println!(
        "Wrote {} benchmarks to {}, {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display(),
        log_path.display()
    );
    Ok(())
}
