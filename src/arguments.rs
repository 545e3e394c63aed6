use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "nv")]
pub struct Arguments {
    /// Directory containing the package.json to stamp
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        let args = Arguments::parse_from(["nv", "/some/path"]);
        assert_eq!(args.path, "/some/path");
        assert!(!args.verbose);
    }

    #[test]
    fn test_path_is_required() {
        let result = Arguments::try_parse_from(["nv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_extra_positional() {
        let result = Arguments::try_parse_from(["nv", "./a", "./b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_verbose() {
        let args = Arguments::parse_from(["nv", "-v", "./"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_long_flags() {
        let args = Arguments::parse_from(["nv", "--verbose", "./app"]);
        assert!(args.verbose);
        assert_eq!(args.path, "./app");
    }
}
