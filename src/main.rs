use std::io::{self, Write};
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use crash_trigger::{cause_crash, CrashKind};

/// Crash this process on purpose, for testing crash reporters.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// What kind of crash to cause: segfault, panic or panic-background-thread.
    #[arg(env = "CRASH_TRIGGER_KIND", default_value_t = CrashKind::Segfault)]
    kind: CrashKind,

    /// Wait this many milliseconds before crashing, so a monitor can attach.
    #[arg(long, value_name = "MS", default_value_t = 0)]
    delay_ms: u64,

    /// Print the process id on stdout before waiting.
    #[arg(long)]
    print_pid: bool,

    /// Use verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    if opts.print_pid {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{}", process::id()).and_then(|()| stdout.flush()) {
            log::warn!("Could not print the process id: {err}");
        }
    }

    if opts.delay_ms > 0 {
        log::debug!("Waiting {} ms before crashing", opts.delay_ms);
        thread::sleep(Duration::from_millis(opts.delay_ms));
    }

    log::debug!("About to cause a {} crash", opts.kind);
    cause_crash(opts.kind)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).format_module_path(false).init();
}
