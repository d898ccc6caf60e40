// File: ./src/cli.rs
//! Command-line front end over the parsing core: handy for scripting and for
//! checking what the input bar would do with a given line.
use crate::config::Config;
use crate::context::{AppContext, StandardContext};
use crate::model::{
    FilterField, Mode, apply_filter_value, apply_suggestion, parse_filters, parse_task,
    secondary_options, suggest_with,
};
use crate::store::TaskStore;
use anyhow::{Result, bail};
use chrono::Local;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::str::FromStr;

pub fn print_help(binary_name: &str) {
    println!(
        "Taskwise v{} - natural-language task parsing, search filters and autocompletion",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <COMMAND> [ARGS...]", binary_name);
    println!();
    println!("COMMANDS:");
    println!("    parse <text...>                 Turn task text into a structured draft");
    println!("    filter <query...>               Parse a search query and list matching tasks");
    println!("    suggest <partial input...>      Completions for the last word typed");
    println!("    apply <current> <chosen>        Insert a chosen completion into the input");
    println!("    values <field>                  Legal values for priority/project/status/due");
    println!("    mode [search|create|toggle]     Show or change the persisted input mode");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -t, --tasks <file>    Task snapshot JSON (default: <data dir>/tasks.json).");
    println!("    -m, --mode <mode>     Override the persisted mode for 'suggest'.");
    println!("        --json            Print 'parse' and 'filter' results as JSON.");
    println!("    -v, --verbose         Debug logging on stderr (or set TASKWISE_LOG).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("CREATE-MODE SYNTAX:");
    println!("    today, tomorrow, next week, [next] monday..sunday, 4/15, 12-31-2027");
    println!("    at 5pm, 9:30am, 18:45          (time is kept only next to a date)");
    println!("    urgent, asap, important, critical, high/medium/low priority, eventually");
    println!("    remind me to ..., don't forget to ...");
    println!();
    println!("SEARCH-MODE SYNTAX:");
    println!("    #tag  priority:high  project:name  status:completed  due:overdue");
}

#[derive(Debug, Default)]
struct Options {
    root: Option<PathBuf>,
    tasks: Option<PathBuf>,
    mode: Option<Mode>,
    json: bool,
    verbose: bool,
    help: bool,
    rest: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-r" | "--root" => match iter.next() {
                Some(p) => opts.root = Some(PathBuf::from(p)),
                None => bail!("--root requires a path"),
            },
            "-t" | "--tasks" => match iter.next() {
                Some(p) => opts.tasks = Some(PathBuf::from(p)),
                None => bail!("--tasks requires a file"),
            },
            "-m" | "--mode" => match iter.next() {
                Some(m) => {
                    opts.mode = Some(
                        Mode::from_str(m).map_err(|_| anyhow::anyhow!("Unknown mode '{}'", m))?,
                    )
                }
                None => bail!("--mode requires 'search' or 'create'"),
            },
            "--json" => opts.json = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => opts.help = true,
            "help" if opts.rest.is_empty() => opts.help = true,
            _ => opts.rest.push(arg.clone()),
        }
    }
    Ok(opts)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        std::env::var("TASKWISE_LOG")
            .ok()
            .and_then(|v| LevelFilter::from_str(&v).ok())
            .unwrap_or(LevelFilter::Warn)
    };
    // A logger may already be installed when embedded; that is fine.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Entry point for the binary. `args` excludes the program name.
pub fn run(binary_name: &str, args: &[String]) -> Result<()> {
    let opts = parse_args(args)?;
    init_logging(opts.verbose);

    let Some((command, rest)) = opts.rest.split_first() else {
        print_help(binary_name);
        return Ok(());
    };
    if opts.help {
        print_help(binary_name);
        return Ok(());
    }

    let ctx = StandardContext::new(opts.root.clone());
    let joined = rest.join(" ");

    match command.as_str() {
        "parse" => {
            let outcome = parse_task(&joined);
            if opts.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                let d = &outcome.draft;
                println!("title:    {}", d.clean_title);
                if let Some(date) = d.due_date {
                    println!("due:      {}", date.format("%Y-%m-%d"));
                }
                if let Some(time) = d.due_time {
                    println!("time:     {}", time.format("%H:%M"));
                }
                if let Some(p) = d.priority {
                    println!("priority: {}", p);
                }
                for s in &outcome.suggestions {
                    println!("  {}", s);
                }
            }
        }
        "filter" => {
            let filters = parse_filters(&joined);
            let store = load_store(&ctx, opts.tasks.as_deref())?;
            let hits = store.filter(&filters, Local::now().date_naive());
            if opts.json {
                let out = serde_json::json!({ "filters": filters, "tasks": hits });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                if filters.is_empty() {
                    println!("query: (all tasks)");
                } else {
                    println!("query: {}", filters);
                }
                for t in hits {
                    let due = t
                        .due_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default();
                    let mark = if t.completed { "x" } else { " " };
                    println!("[{}] {:<10} {:<6} {}", mark, due, t.priority, t.title);
                }
            }
        }
        "suggest" => {
            let config = Config::load_or_default(&ctx)?;
            let mode = opts.mode.unwrap_or(config.mode);
            let store = load_store(&ctx, opts.tasks.as_deref())?;
            // Keep a trailing space typed by the user: it means "no partial word".
            let partial = if args.last().is_some_and(|a| a.ends_with(' ')) {
                format!("{joined} ")
            } else {
                joined
            };
            for candidate in suggest_with(
                &partial,
                mode,
                &store.live_tags(),
                &store.project_names(),
                &config.suggest_options(),
            ) {
                println!("{}", candidate);
            }
        }
        "apply" => {
            let [current, chosen] = rest else {
                bail!("apply expects exactly two arguments: <current> <chosen>");
            };
            if let Some((field, value)) = FilterField::split_token(chosen)
                && !value.is_empty()
            {
                println!("{}", apply_filter_value(current, field, value));
            } else {
                println!("{}", apply_suggestion(current, chosen));
            }
        }
        "values" => {
            let field = FilterField::from_str(&joined)
                .map_err(|_| anyhow::anyhow!("Unknown filter field '{}'", joined))?;
            let store = load_store(&ctx, opts.tasks.as_deref())?;
            for value in secondary_options(field, &store.project_names()) {
                println!("{}", value);
            }
        }
        "mode" => {
            let mode = match joined.as_str() {
                "" => Config::load_or_default(&ctx)?.mode,
                "toggle" => Config::toggle_mode(&ctx)?,
                other => {
                    let m = Mode::from_str(other)
                        .map_err(|_| anyhow::anyhow!("Unknown mode '{}'", other))?;
                    Config::set_mode(&ctx, m)?
                }
            };
            println!("{}", mode);
        }
        other => bail!("Unknown command '{}'. Try '{} --help'.", other, binary_name),
    }
    Ok(())
}

fn load_store(ctx: &dyn AppContext, explicit: Option<&std::path::Path>) -> Result<TaskStore> {
    match explicit {
        Some(path) => TaskStore::load(path),
        None => match ctx.get_snapshot_path() {
            Some(path) => TaskStore::load(&path),
            None => {
                log::warn!("Could not resolve the data directory; using an empty task list");
                Ok(TaskStore::default())
            }
        },
    }
}
