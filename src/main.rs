use anyhow::{bail, Context, Result};
use std::{env, path::PathBuf, process};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use scriptsheet::{
    annotation::block::TrailingBlock,
    convert_file,
    cue_sheet::prefix::{CueField, PrefixConfig},
    error::ScriptsheetError,
    ConvertOptions,
};

// (field, short flag, long flag, what the prefix tags)
const PREFIX_FLAGS: [(CueField, &str, &str, &str); 9] = [
    (CueField::Number, "q", "cue", "cues"),
    (CueField::Time, "i", "time", "times"),
    (CueField::Label, "l", "label", "labels"),
    (CueField::Notes, "n", "notes", "notes"),
    (CueField::Scene, "s", "scene", "scenes"),
    (CueField::Mark, "m", "mark", "marks"),
    (CueField::Block, "b", "block", "blocks"),
    (CueField::Follow, "f", "follow", "follows"),
    (CueField::Execute, "x", "execute", "executes"),
];

struct Args {
    source: PathBuf,
    dest: PathBuf,
    options: ConvertOptions,
}

fn build_options() -> getopts::Options {
    let mut opts = getopts::Options::new();

    for (field, short, long, tagged) in PREFIX_FLAGS {
        opts.optopt(
            short,
            long,
            &format!(
                "The prefix for {} in comments. Defaults to '{}'.",
                tagged,
                field.default_prefix()
            ),
            "PREFIX",
        );
    }
    opts.optflag(
        "",
        "keep-trailing-block",
        "Also convert a block quote that runs to the end of the file.",
    );
    opts.optflag("h", "help", "Print this help.");

    opts
}

// getopts rejects one-letter long names, so "--q" is read as "-q".
fn rewrite_single_letter_flags(args: Vec<String>) -> Vec<String> {
    let mut rewritten = Vec::with_capacity(args.len());
    let mut free_only = false;

    for arg in args {
        if free_only || arg == "--" {
            free_only = true;
            rewritten.push(arg);
            continue;
        }

        let Some(flag) = arg.strip_prefix("--") else {
            rewritten.push(arg);
            continue;
        };

        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (flag, None),
        };

        if PREFIX_FLAGS.iter().any(|(_, short, _, _)| *short == name) {
            rewritten.push(format!("-{}", name));
            if let Some(value) = value {
                rewritten.push(value.to_owned());
            }
        } else {
            rewritten.push(arg);
        }
    }

    rewritten
}

fn get_args() -> Result<Option<Args>> {
    let program = env::args().next().unwrap_or_else(|| "scriptsheet".to_owned());
    let args = rewrite_single_letter_flags(env::args().skip(1).collect());

    let opts = build_options();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options] SOURCE DEST", program);
        print!("{}", opts.usage(&brief));
        return Ok(None);
    }

    let source = matches
        .free
        .first()
        .context("source file (.md) is required")?;
    let dest = matches
        .free
        .get(1)
        .context("dest file (.md) is required")?;

    let mut prefixes = PrefixConfig::default();
    for (field, short, _, _) in PREFIX_FLAGS {
        if let Some(prefix) = matches.opt_str(short) {
            prefixes.set(field, prefix);
        }
    }

    let trailing_block = if matches.opt_present("keep-trailing-block") {
        TrailingBlock::Keep
    } else {
        TrailingBlock::Drop
    };

    Ok(Some(Args {
        source: PathBuf::from(source),
        dest: PathBuf::from(dest),
        options: ConvertOptions {
            prefixes,
            trailing_block,
        },
    }))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let Some(args) = get_args()? else {
        return Ok(());
    };

    debug!(prefixes = ?args.options.prefixes, "prefixes");

    match convert_file(&args.source, &args.dest, &args.options) {
        Ok(count) => {
            info!(cues = count, dest = %args.dest.display(), "cue sheet written");
            Ok(())
        }
        Err(err) => {
            if let Some(ScriptsheetError::SourceNotFound { path, source }) =
                err.downcast_ref::<ScriptsheetError>()
            {
                debug!(path = %path.display(), error = %source, "cannot open source");
                println!("{}", err);
                process::exit(1);
            }
            Err(err)
        }
    }
}
