// Date Range Picker
// Terminal driver: reads commands from stdin and redraws the picker

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};

use date_range_picker::services::persistence::{load_state, save_state};
use date_range_picker::services::picker::DialogPhase;
use date_range_picker::services::settings::load_config;
use date_range_picker::ui::render::{render_body, render_header};
use date_range_picker::ui::{update, Message};
use date_range_picker::{DateValue, PickerConfig, ViewController};

const HELP: &str = "commands: day <start|end> YYYY-MM-DD | year <start|end> YYYY | toggle <start|end>\n\
                    view <start-day|start-year|end-day|end-year|duration> | arrow | digit N | back | clear\n\
                    suspend <file> | ok | cancel";

struct Args {
    config: Option<PathBuf>,
    resume: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        resume: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--resume" => {
                let path = iter.next().context("--resume needs a state file")?;
                args.resume = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown flag {}", flag),
            path => args.config = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn open_picker(args: &Args) -> Result<ViewController> {
    if let Some(path) = &args.resume {
        if let Some(saved) = load_state(path)? {
            log::info!("Resuming picker from {}", path.display());
            return Ok(ViewController::from_saved(&saved)?);
        }
        log::warn!("No saved picker state at {}, starting fresh", path.display());
    }

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PickerConfig::default(),
    };
    Ok(ViewController::new(config)?)
}

fn draw(picker: &ViewController) {
    println!("{}", render_header(picker));
    println!("{}", render_body(picker));
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = parse_args()?;
    let mut picker = open_picker(&args)?;

    let dirty = Rc::new(Cell::new(true));
    {
        let dirty = Rc::clone(&dirty);
        picker.subscribe(move || dirty.set(true));
    }

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while picker.is_open() {
        if dirty.replace(false) {
            draw(&picker);
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            picker.cancel();
            break;
        };
        let line = line?;

        if let Some(path) = line.trim().strip_prefix("suspend ") {
            if let Some(state) = picker.suspend() {
                save_state(Path::new(path.trim()), &state)?;
                println!("saved to {}", path.trim());
            }
            return Ok(());
        }

        let message = match Message::parse(&line) {
            Ok(message) => message,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match update(&mut picker, message) {
            Ok(Some(selection)) => {
                let show = |date: Option<DateValue>| {
                    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
                };
                println!("start: {}  end: {}", show(selection.start), show(selection.end));
            }
            Ok(None) => {}
            Err(err) => println!("rejected: {}", err),
        }
    }

    if picker.phase() == DialogPhase::Cancelled {
        println!("cancelled");
    }
    Ok(())
}
