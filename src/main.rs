// main.rs - CLI entry point

use std::time::Instant;

use seqlcs::cli::Config;
use seqlcs::output;
use seqlcs::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let input = args.input.as_ref().ok_or("--input is required")?;

    println!("🚀 seqlcs v{}", env!("CARGO_PKG_VERSION"));

    // Validate all arguments
    let validation_result = validate_args(&args)?;

    let total_start = Instant::now();

    // Load and filter sequences
    let mut sequences = SequenceSet::from_file(std::path::Path::new(input))?;
    sequences.apply_label_filters(
        validation_result.include_regex.as_ref(),
        validation_result.exclude_regex.as_ref(),
    );

    output::print_sequences(&sequences);

    let n = sequences.len();
    let total_pairs = if n < 2 { 0 } else { n * (n - 1) / 2 };

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        println!("📊 {} sequences, {} pairs to evaluate", n, total_pairs);
        return Ok(());
    }

    if total_pairs == 0 {
        println!("⚠️  Fewer than two sequences loaded - nothing to compare");
    }

    // Run both algorithms over every pair
    let evaluator = PairwiseEvaluator::new(validation_result.time_budget);
    let evaluation = evaluator.evaluate(&sequences);

    // Per-pair report, then the summary table
    output::print_pair_details(&sequences, &evaluation, args.show_tables);
    println!("\n{}", output::render_table(&sequences, &evaluation));

    if !evaluation.truncated.is_empty() {
        println!(
            "⚠️  {} brute-force run(s) truncated by the {}s time budget - those LCS values may be suboptimal",
            evaluation.truncated.len(),
            args.time_budget
        );
    }

    // Write output file if requested
    if let Some(ref output_path) = args.output {
        write_results(
            output_path,
            &args.format,
            &sequences,
            &evaluation,
            &command_line,
        )?;
    }

    // Print summary
    let total_elapsed = total_start.elapsed();
    println!(
        "⏱️  Total execution time: {:.2}s",
        total_elapsed.as_secs_f64()
    );

    Ok(())
}
