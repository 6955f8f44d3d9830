// Prints random haiku built from a pronunciation dictionary filtered by the
// vocabulary of a reference text.
//
// Usage:
//   random-haiku [OPTIONS]
//     --config <PATH>      JSON config file (fields match HaikuConfig)
//     --dict <PATH>        Pronunciation dictionary (default: pronunciation_dict.txt)
//     --text <PATH>        Reference text (default: silmarillion.txt)
//     --count <N>          Number of haiku (default: 100)
//     --seed <N>           Fixed RNG seed
//     --pattern <A,B,C>    Syllables per line (default: 5,7,5)
//     --dump-syllables     Print the filtered syllable map and exit

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use random_haiku::{HaikuConfig, HaikuError, HaikuGenerator, Result};

/// Command-line flags. Values given here override those from `--config`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Flags {
    config_path: Option<PathBuf>,
    dict: Option<PathBuf>,
    text: Option<PathBuf>,
    count: Option<usize>,
    seed: Option<u64>,
    pattern: Option<Vec<usize>>,
    dump_syllables: bool,
}

impl Flags {
    fn into_config(self) -> Result<HaikuConfig> {
        let mut config = match &self.config_path {
            Some(path) => HaikuConfig::load(path)?,
            None => HaikuConfig::default(),
        };
        if let Some(path) = self.dict {
            config.pronunciation_path = path;
        }
        if let Some(path) = self.text {
            config.reference_path = path;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let flags = parse_args(&argv).unwrap_or_else(|msg| fail(&msg));
    let dump_syllables = flags.dump_syllables;
    let result = flags
        .into_config()
        .and_then(|config| run(&config, dump_syllables));
    if let Err(e) = result {
        fail(&e.to_string());
    }
}

fn run(config: &HaikuConfig, dump_syllables: bool) -> Result<()> {
    let mut haiku_gen = HaikuGenerator::from_config(config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if dump_syllables {
        haiku_gen.syllables.dump(&mut out).map_err(stdout_error)?;
        return out.flush().map_err(stdout_error);
    }

    for _ in 0..config.count {
        let haiku = haiku_gen.generate()?;
        writeln!(out, "{haiku}\n").map_err(stdout_error)?;
    }
    out.flush().map_err(stdout_error)
}

fn stdout_error(source: io::Error) -> HaikuError {
    HaikuError::Io { path: PathBuf::from("<stdout>"), source }
}

fn parse_args(argv: &[String]) -> std::result::Result<Flags, String> {
    let mut flags = Flags::default();
    let mut i = 0;

    while i < argv.len() {
        let flag = argv[i].as_str();
        match flag {
            "--dump-syllables" => flags.dump_syllables = true,
            "--config" | "--dict" | "--text" | "--count" | "--seed" | "--pattern" => {
                i += 1;
                let value = argv
                    .get(i)
                    .ok_or_else(|| format!("{flag} requires a value"))?;
                match flag {
                    "--config" => flags.config_path = Some(PathBuf::from(value)),
                    "--dict" => flags.dict = Some(PathBuf::from(value)),
                    "--text" => flags.text = Some(PathBuf::from(value)),
                    "--count" => {
                        flags.count = Some(
                            value
                                .parse()
                                .map_err(|_| "--count requires a non-negative integer".to_string())?,
                        );
                    }
                    "--seed" => {
                        flags.seed = Some(
                            value
                                .parse()
                                .map_err(|_| "--seed requires an unsigned integer".to_string())?,
                        );
                    }
                    _ => {
                        flags.pattern = Some(parse_pattern(value).ok_or_else(|| {
                            "--pattern expects comma-separated integers, e.g. 5,7,5".to_string()
                        })?);
                    }
                }
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(flags)
}

fn parse_pattern(s: &str) -> Option<Vec<usize>> {
    s.split(',').map(|p| p.trim().parse().ok()).collect()
}

fn fail(msg: &str) -> ! {
    eprintln!("random-haiku: {msg}");
    process::exit(1);
}
