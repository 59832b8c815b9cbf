//! Heap profiling run: transpose a synthetic wide matrix under dhat
//!
//! The whole point of the streaming design is that peak memory stays close
//! to the input size plus one row, rather than a full row-by-column grid.
//! This run makes that measurable.
//!
//! Run with:
//! ```bash
//! cargo run --example memory_bench --features dhat-heap
//! ```

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[cfg(feature = "dhat-heap")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::fmt::Write as _;

    let _profiler = dhat::Profiler::new_heap();

    let dir = tempfile::tempdir()?;
    let input = dir.path().join("wide.csv");
    let output = dir.path().join("tall.csv");

    // 200 rows x 5000 columns, the wide shape the tool was built for
    let rows = 200;
    let cols = 5000;
    let mut content = String::new();
    for r in 0..rows {
        for c in 0..cols {
            if c > 0 {
                content.push(',');
            }
            write!(content, "{}", (r + c) % 4)?;
        }
        content.push('\n');
    }
    std::fs::write(&input, &content)?;

    println!("📂 Input:  {} bytes ({} x {})", content.len(), rows, cols);
    drop(content);

    let summary = csvtranspose::Transposer::new().run(&input, &output)?;

    println!(
        "✅ Transposed {} rows x {} columns",
        summary.rows_read, summary.columns
    );
    println!("   dhat stats are printed when the profiler drops");

    Ok(())
}

#[cfg(not(feature = "dhat-heap"))]
fn main() {
    eprintln!("❌ This example requires the 'dhat-heap' feature.");
    eprintln!("\nRun with:");
    eprintln!("  cargo run --example memory_bench --features dhat-heap");
    std::process::exit(1);
}
