use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use lipsync_timeline::{
    compute_schedule_stats, parse_sync_file, CompileConfig, EventRecord, Meta, RestPlacement,
    TimelineCompiler, TimelineCompilerBuilder, TimelineReport,
};

#[path = "timeline_report/json_report_formatter.rs"]
mod json_report_formatter;

const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RestPlacementChoice {
    /// Legacy placement: rest frame derived from the event's index.
    SequenceIndex,
    /// Time-derived placement: rest frame derived from the event's frame.
    FrameOffset,
}

impl RestPlacementChoice {
    fn placement(self, frame_offset: i64) -> RestPlacement {
        match self {
            Self::SequenceIndex => RestPlacement::SequenceIndex,
            Self::FrameOffset => RestPlacement::FrameOffset(frame_offset),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "timeline_report")]
#[command(about = "Compile .sync phonetic transcriptions into keyframe timing reports")]
struct Args {
    /// Input .sync transcription files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    #[arg(
        long,
        env = "LIPSYNC_REPORT_FPS",
        default_value_t = CompileConfig::DEFAULT_FRAME_RATE
    )]
    fps: f64,
    #[arg(
        long,
        env = "LIPSYNC_REPORT_BASE_POSE",
        default_value = CompileConfig::DEFAULT_BASE_POSE
    )]
    base_pose: String,
    #[arg(
        long,
        env = "LIPSYNC_REPORT_GAP_THRESHOLD",
        default_value_t = CompileConfig::DEFAULT_GAP_THRESHOLD_FRAMES
    )]
    gap_threshold: i64,
    #[arg(
        long,
        env = "LIPSYNC_REPORT_REST_PLACEMENT",
        value_enum,
        default_value_t = RestPlacementChoice::SequenceIndex
    )]
    rest_placement: RestPlacementChoice,
    /// Frames between a speech event and its snap-back rest; only used with
    /// --rest-placement frame-offset.
    #[arg(long, env = "LIPSYNC_REPORT_REST_FRAME_OFFSET", default_value_t = 2)]
    rest_frame_offset: i64,
    /// JSON classifier-table override for rigs with a different mouth set.
    #[arg(long, env = "LIPSYNC_REPORT_TABLE")]
    table: Option<PathBuf>,
    #[arg(
        long,
        env = "LIPSYNC_REPORT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Json
    )]
    output_format: OutputFormat,
    /// Output file (single input) or directory (multiple inputs); defaults
    /// to a .timeline.json sibling of each input.
    #[arg(long, env = "LIPSYNC_REPORT_OUT")]
    out: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    for input in &args.inputs {
        require_path_exists(input, "Missing input .sync file.")?;
    }
    if let Some(table) = args.table.as_ref() {
        require_path_exists(table, "Missing classifier table override.")?;
    }

    let compiler = build_compiler(&args)?;

    let progress = if args.inputs.len() > 1 {
        let bar = ProgressBar::new(args.inputs.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut written = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        if let Some(bar) = progress.as_ref() {
            bar.set_message(input.display().to_string());
        }

        let records = parse_sync_file(input)
            .map_err(|err| format!("{}: {err}", input.display()))?;
        let scheduled = compiler
            .compile(&records)
            .map_err(|err| format!("{}: {err}", input.display()))?;

        match args.output_format {
            OutputFormat::Json => {
                let report = TimelineReport {
                    schema_version: REPORT_SCHEMA_VERSION,
                    meta: Meta {
                        generated_at: Utc::now().to_rfc3339(),
                        source_path: input.display().to_string(),
                        frame_rate: args.fps,
                        base_pose: args.base_pose.clone(),
                        record_count: records.len(),
                    },
                    events: scheduled.iter().map(EventRecord::from).collect(),
                    stats: compute_schedule_stats(&scheduled),
                };
                let out_path = resolve_out_path(input, args.out.as_deref(), args.inputs.len());
                json_report_formatter::write_report(&out_path, &report)?;
                written.push(out_path);
            }
            OutputFormat::Text => {
                for event in &scheduled {
                    let kind = if event.is_rest() { "rest" } else { "speech" };
                    println!("{:>6}  {:<8}{}", event.frame(), event.pose_name(), kind);
                }
            }
        }

        if let Some(bar) = progress.as_ref() {
            bar.inc(1);
        }
    }

    if let Some(bar) = progress {
        bar.finish_with_message("compile pass complete");
    }
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn build_compiler(args: &Args) -> Result<TimelineCompiler, String> {
    let config = CompileConfig {
        frame_rate: args.fps,
        base_pose: args.base_pose.clone(),
        gap_threshold_frames: args.gap_threshold,
        rest_placement: args.rest_placement.placement(args.rest_frame_offset),
        table_path: args
            .table
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned()),
    };
    TimelineCompilerBuilder::new(config)
        .build()
        .map_err(|err| format!("Failed to build TimelineCompiler: {err}"))
}

fn resolve_out_path(input: &Path, out: Option<&Path>, input_count: usize) -> PathBuf {
    let default_name = match input.file_stem() {
        Some(stem) => format!("{}.timeline.json", stem.to_string_lossy()),
        None => "timeline.json".to_string(),
    };
    match out {
        Some(path) if input_count == 1 => path.to_path_buf(),
        Some(dir) => dir.join(default_name),
        None => input.with_file_name(default_name),
    }
}

fn require_path_exists(path: &Path, message: &str) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    Err(format!("{message} Missing path: {}", path.display()))
}
