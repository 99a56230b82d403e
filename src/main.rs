// SPDX-License-Identifier: MPL-2.0
use synth_lens::app::{self, Flags};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
AI Image Detector

USAGE:
  synth_lens [OPTIONS] [IMAGE]

OPTIONS:
  --api-url <URL>          Base URL of the prediction service
  --max-file-size <BYTES>  Largest accepted image, in bytes
  --lang <LOCALE>          UI language (e.g. en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
  -h, --help               Print this help

ENVIRONMENT:
  API_URL, MAX_FILE_SIZE, SYNTH_LENS_CONFIG_DIR, RUST_LOG
";

fn main() -> iced::Result {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let api_url = args.opt_value_from_str("--api-url")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let max_file_size = args
        .opt_value_from_str::<_, u64>("--max-file-size")?
        .filter(|&size| {
            if size == 0 {
                warn!("ignoring --max-file-size 0");
            }
            size > 0
        });

    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        file_path,
        api_url,
        max_file_size,
        config_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn flags_and_positional_image_are_parsed() {
        let flags = parse_flags(args(&[
            "--api-url",
            "http://detector:5000",
            "--max-file-size",
            "2048",
            "--lang",
            "fr",
            "cat.png",
        ]))
        .expect("valid arguments");

        assert_eq!(flags.api_url.as_deref(), Some("http://detector:5000"));
        assert_eq!(flags.max_file_size, Some(2048));
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.file_path.as_deref(), Some("cat.png"));
        assert!(flags.config_dir.is_none());
    }

    #[test]
    fn zero_size_limit_is_ignored() {
        let flags = parse_flags(args(&["--max-file-size", "0"])).expect("valid arguments");
        assert!(flags.max_file_size.is_none());
    }

    #[test]
    fn non_numeric_size_limit_is_an_error() {
        assert!(parse_flags(args(&["--max-file-size", "big"])).is_err());
    }
}
