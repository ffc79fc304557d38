//! Run command: execute the full pipeline and render every artifact.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::pipeline::{
    run_pipeline, score_idea, RunReport, Script, Severity, ADAPTIVE_MOVES,
};

/// Options for the run command
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Config file path
    pub config: PathBuf,
    /// Custom pool file, overriding the config
    pub pool: Option<PathBuf>,
    /// RNG seed, overriding the config
    pub seed: Option<u64>,
    /// Emit the full report as JSON
    pub json: bool,
    /// Skip the pacing wait before rendering
    pub no_wait: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from("hookforge.config.json"),
            pool: None,
            seed: None,
            json: false,
            no_wait: false,
        }
    }
}

/// Execute the run command
pub fn execute_run(options: RunOptions) -> Result<()> {
    let config = Config::load(&options.config)?;
    let pool = super::load_pool(&config, options.pool.as_deref())?;
    let mut rng = super::make_rng(options.seed.or(config.seed));

    // Simulated wait, a pacing device for the reader; the pipeline itself is
    // a single synchronous pass.
    if !options.json && !options.no_wait && config.pacing_ms > 0 {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        spinner.set_message("Interrogating viewers...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        std::thread::sleep(Duration::from_millis(config.pacing_ms));
        spinner.finish_and_clear();
    }

    let report = run_pipeline(&pool, &mut rng)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render_report(&report);
    Ok(())
}

fn render_report(report: &RunReport) {
    println!(
        "{} {}  {}",
        style("Operation").bold(),
        style(report.run_id).dim(),
        style(report.generated_at.format("%H:%M:%S UTC")).dim()
    );

    println!("\n{}", style("Idea generation · 5 dark provocations").bold());
    for idea in &report.ideas {
        let killed = report.casualties.iter().any(|c| c.id == idea.id);
        let status = if killed {
            style("Eliminated").red().dim()
        } else {
            style("Contender").green()
        };
        println!("\n  [{}] {}", status, style(&idea.title).bold());
        println!("      {}", idea.why_stop);
        println!(
            "      {}",
            style(format!(
                "discomfort {:.1}  curiosity {:.1}  novelty {:.1}  score {:.1}",
                idea.discomfort,
                idea.curiosity,
                idea.novelty,
                score_idea(idea)
            ))
            .dim()
        );
    }

    println!("\n{}", style("Strategic kill · 3 casualties").bold());
    for idea in &report.casualties {
        println!("  {} {}", style("✗").red(), style(&idea.title).bold());
        println!("    {}", style(&idea.hook).dim());
    }

    println!("\n{}", style("Chosen weapon · emotionally unsafe hook").bold());
    println!("  {}", style(&report.winner.hook).bold());
    println!("  {}", style(&report.winner.angle).dim());
    println!("  Pattern interrupts engineered:");
    for interrupt in &report.winner.pattern_interrupts {
        println!("    - {interrupt}");
    }

    println!("\n{}", style("Draft script · raw escalation").bold());
    render_script(&report.draft);

    println!("\n{}", style("Brutal self-critique").bold());
    if report.critiques.is_empty() {
        println!("  The draft survived every check. Suspicious.");
    }
    for critique in &report.critiques {
        println!(
            "  {} {}",
            severity_badge(critique.severity),
            critique.note
        );
        println!("    {}", style(&critique.remedy).dim());
    }

    println!("\n{}", style("Refined script · deploy-ready").bold());
    render_script(&report.refined);

    println!("\n{}", style("Failure protocol · adapt or die").bold());
    for (index, step) in ADAPTIVE_MOVES.iter().enumerate() {
        println!("  {}. {step}", index + 1);
    }

    println!(
        "\n{}",
        style("One strong takeaway secured. Growth beats volume.").dim()
    );
}

fn render_script(script: &Script) {
    println!("  {}", style("Hook (first 3 seconds)").underlined());
    println!("    {}", script.hook);
    for beat in &script.beats {
        println!("  {}", style(&beat.label).underlined());
        println!("    {}", beat.content);
    }
    println!("  {}", style("Takeaway").underlined());
    println!("    {}", script.takeaway);
}

fn severity_badge(severity: Severity) -> console::StyledObject<&'static str> {
    match severity {
        Severity::High => style("HIGH").red().bold(),
        Severity::Medium => style("MEDIUM").yellow(),
        Severity::Low => style("LOW").dim(),
    }
}
