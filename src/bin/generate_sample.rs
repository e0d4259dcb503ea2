use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

struct Launch {
    flight_number: i64,
    site: &'static str,
    class: i64,
    payload_kg: f64,
    booster_version: String,
    category: &'static str,
}

/// Booster generations in flight order: (category, flights, success probability).
const ERAS: [(&str, usize, f64); 5] = [
    ("v1.0", 5, 0.0),
    ("v1.1", 15, 0.2),
    ("FT", 24, 0.65),
    ("B4", 11, 0.55),
    ("B5", 1, 1.0),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn generate(rng: &mut SimpleRng) -> Vec<Launch> {
    let mut launches = Vec::new();
    let mut flight_number = 1;

    for &(category, flights, success_rate) in &ERAS {
        for _ in 0..flights {
            // Early flights only flew from the Cape.
            let site = if flight_number <= 5 {
                SITES[0]
            } else {
                *rng.pick(&SITES)
            };
            let payload_kg = (rng.next_f64() * 9600.0).round();
            let class = i64::from(rng.next_f64() < success_rate);
            launches.push(Launch {
                flight_number,
                site,
                class,
                payload_kg,
                booster_version: format!("F9 {category}  B{:04}", 1000 + flight_number),
                category,
            });
            flight_number += 1;
        }
    }

    launches
}

fn write_csv(path: &str, launches: &[Launch]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer.write_record([
        "",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;
    for (i, l) in launches.iter().enumerate() {
        writer.write_record([
            i.to_string(),
            l.flight_number.to_string(),
            l.site.to_string(),
            l.class.to_string(),
            format!("{:.1}", l.payload_kg),
            l.booster_version.clone(),
            l.category.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &str, launches: &[Launch]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(
                launches.iter().map(|l| l.flight_number),
            )),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.site))),
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
            Arc::new(Float64Array::from_iter_values(
                launches.iter().map(|l| l.payload_kg),
            )),
            Arc::new(StringArray::from_iter_values(
                launches.iter().map(|l| l.booster_version.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                launches.iter().map(|l| l.category),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let launches = generate(&mut rng);

    write_csv("spacex_launch_dash.csv", &launches)?;
    write_parquet("spacex_launch_dash.parquet", &launches)?;

    println!(
        "Wrote {} launches to spacex_launch_dash.csv and spacex_launch_dash.parquet",
        launches.len()
    );
    Ok(())
}
