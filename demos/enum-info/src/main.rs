use std::process::ExitCode;

use clap::Parser;
use enumtool::Enumerated;
use tracing::{Level, info};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
#[allow(non_camel_case_types)]
enum EnumT {
    cero0,
    second1,
    the_third123,
    almost_done,
    last_the_fourth_4,
}

/// Prints what enumtool finds out about a sample enum.
#[derive(Parser)]
struct App {
    #[arg(long, short, default_value_t = Level::WARN)]
    log_level: Level,
    /// Look up the name at this ordinal instead of printing everything.
    #[arg(long)]
    ordinal: Option<usize>,
    /// Follow the wrapping successor chain for one full cycle.
    #[arg(long)]
    wrap: bool,
}

impl App {
    pub fn init_logger(&self) {
        let filter = tracing_subscriber::filter::Targets::new()
            .with_default(self.log_level)
            .with_target("enumtool::range", Level::INFO);
        let layer = tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .init();
    }

    fn run(&self) -> enumtool::Result<()> {
        if let Some(ordinal) = self.ordinal {
            println!("{}", enumtool::value_name_at::<EnumT>(ordinal)?);
        } else if self.wrap {
            let mut value = enumtool::first::<EnumT>()?;
            for _ in 0..enumtool::num_values::<EnumT>()? {
                print!("{} -> ", enumtool::value_name(value)?);
                value = enumtool::next_wrapping(value)?;
            }
            println!("{}", enumtool::value_name(value)?);
        } else {
            print!("{}", enumtool::enum_info::<EnumT>()?);
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let app = App::parse();
    app.init_logger();
    info!(ordinal = ?app.ordinal, wrap = app.wrap, "starting");
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("enum-info: {}", err);
            ExitCode::FAILURE
        }
    }
}
