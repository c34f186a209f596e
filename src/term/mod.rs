extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult};
use pocket::lang::Error;
use pocket::mach::{
    Host, Options, Registry, Stream, DEFAULT_ARENA_SIZE, DEFAULT_MAX_SCRIPT_SIZE,
};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pocket", version, about = "Pocket scripting language")]
struct Args {
    /// Scripts to run in order. Starts the interactive prompt when empty.
    files: Vec<PathBuf>,

    /// Bytes available to each instance for symbols, stack and definitions
    #[arg(long, default_value_t = DEFAULT_ARENA_SIZE)]
    arena_size: usize,

    /// Largest script file accepted
    #[arg(long, default_value_t = DEFAULT_MAX_SCRIPT_SIZE)]
    max_script_size: usize,

    /// Name of the first instance
    #[arg(long)]
    name: Option<String>,
}

impl Args {
    fn options(&self, name: Option<String>) -> Options {
        Options {
            arena_size: self.arena_size,
            max_script_size: self.max_script_size,
            name,
        }
    }
}

/// Script output on stdout, errors in bold on stderr.
struct TermHost;

impl Host for TermHost {
    fn print_bytes(&mut self, stream: Stream, bytes: &[u8]) {
        let _ = match stream {
            Stream::Out => {
                let mut out = std::io::stdout();
                out.write_all(bytes).and_then(|_| out.flush())
            }
            Stream::Err => {
                let text = String::from_utf8_lossy(bytes);
                write!(std::io::stderr(), "{}", Style::new().bold().paint(text))
            }
        };
    }
}

pub fn main() {
    install_tracing();
    let args = Args::parse();
    let code = if args.files.is_empty() {
        match main_loop(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", error);
                1
            }
        }
    } else {
        run_files(&args)
    };
    std::process::exit(code);
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs each file on one instance. The first failure ends the run and
/// its code becomes the exit status.
fn run_files(args: &Args) -> i32 {
    let mut registry = Registry::new();
    if let Err(error) = registry.new_instance(args.options(args.name.clone()), Box::new(TermHost)) {
        report(&error);
        return -error.code();
    }
    for path in args.files.iter() {
        let result = match registry.current() {
            Some(runtime) => runtime.eval_file(path),
            None => return 1,
        };
        if let Err(error) = result {
            return -error.code();
        }
    }
    0
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

fn brace_depth(text: &str) -> i64 {
    text.bytes().fold(0, |depth, b| match b {
        b'{' => depth + 1,
        b'}' => depth - 1,
        _ => depth,
    })
}

fn main_loop(args: &Args) -> std::io::Result<()> {
    let interface = Interface::new("pocket")?;
    let mut registry = Registry::new();
    if let Err(error) = registry.new_instance(args.options(args.name.clone()), Box::new(TermHost)) {
        report(&error);
        return Ok(());
    }
    let mut pending = String::new();

    loop {
        let prompt = if pending.is_empty() {
            format!("{}> ", registry.current().map(|r| r.name().to_string()).unwrap_or_default())
        } else {
            "| ".to_string()
        };
        interface.set_prompt(&prompt)?;
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if pending.is_empty() && line.trim_start().starts_with('.') {
            interface.add_history_unique(line.clone());
            if !dot_command(&mut registry, &interface, args, line.trim())? {
                break;
            }
            continue;
        }
        if !line.trim().is_empty() {
            interface.add_history_unique(line.clone());
        }
        pending.push_str(&line);
        pending.push('\n');
        if brace_depth(&pending) > 0 {
            continue;
        }
        let text = std::mem::take(&mut pending);
        match registry.current() {
            // Errors were already reported by the instance.
            Some(runtime) => {
                let _ = runtime.eval_string(&text, false, true);
            }
            None => interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint("NO INSTANCE; USE .new")
            ))?,
        }
    }
    Ok(())
}

/// Returns false to leave the prompt.
fn dot_command<T: linefeed::Terminal>(
    registry: &mut Registry,
    interface: &Interface<T>,
    args: &Args,
    line: &str,
) -> std::io::Result<bool> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");
    let operand = words.next();
    let result = match command {
        ".quit" => return Ok(false),
        ".new" => registry
            .new_instance(args.options(operand.map(str::to_string)), Box::new(TermHost))
            .map(|_| ()),
        ".use" => {
            let index = operand.and_then(|s| s.parse::<usize>().ok().or_else(|| registry.find(s)));
            match index {
                Some(index) => registry.set_current(index),
                None => Err(pocket::error!(NoSuchInstance)),
            }
        }
        ".list" => {
            let current = registry.current_index();
            for (index, name) in registry.names().iter().enumerate() {
                let marker = if Some(index) == current { "*" } else { " " };
                interface.write_fmt(format_args!("{}{} {}\n", marker, index, name))?;
            }
            Ok(())
        }
        _ => {
            interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint("COMMANDS: .new [name] .use <n|name> .list .quit")
            ))?;
            Ok(())
        }
    };
    if let Err(error) = result {
        interface.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(error.to_string())
        ))?;
    }
    Ok(true)
}
