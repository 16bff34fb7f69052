//! Command-line plumbing shared by the generator binaries.
//!
//! The surface is one positional argument, the output path. Anything after
//! it is ignored.

/// Extract the output path from an argv-style iterator (element 0 is the
/// program name). `None` when no path was given.
pub fn output_path<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().nth(1)
}

/// The usage line printed (to stdout) when the output path is missing.
pub fn usage(bin: &str) -> String {
    format!("Usage: {bin} <output_file.h5ad>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_path() {
        assert_eq!(output_path(argv(&["gen_dense_h5ad"])), None);
    }

    #[test]
    fn first_positional_wins() {
        assert_eq!(
            output_path(argv(&["gen_dense_h5ad", "out.h5ad", "extra"])),
            Some("out.h5ad".to_string())
        );
    }

    #[test]
    fn usage_names_binary() {
        assert_eq!(
            usage("gen_layers_h5ad"),
            "Usage: gen_layers_h5ad <output_file.h5ad>"
        );
    }
}
