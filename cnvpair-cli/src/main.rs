mod collate;
mod common;
mod cut;
mod pair;
mod squash;

use anyhow::Result;
use clap::{ArgAction, Command, arg};
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "cnvpair";
    pub const BIN_NAME: &str = "cnvpair";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Aggregate copy number segments over target genes and compare paired profiles.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(pair::cli::create_pair_cli())
        .subcommand(cut::cli::create_cut_cli())
        .subcommand(collate::cli::create_collate_cli())
        .subcommand(squash::cli::create_squash_cli())
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));
    tracing::debug!("{} v{}", consts::PKG_NAME, consts::VERSION);

    match matches.subcommand() {
        //
        // PAIRED PROFILES OVER GENES
        //
        Some((pair::cli::PAIR_CMD, matches)) => {
            pair::handlers::run_pair(matches)?;
        }

        //
        // SEGMENT-ANCHORED COMPARISON
        //
        Some((cut::cli::CUT_CMD, matches)) => {
            cut::handlers::run_cut(matches)?;
        }

        //
        // GENE BY SAMPLE TABLE
        //
        Some((collate::cli::COLLATE_CMD, matches)) => {
            collate::handlers::run_collate(matches)?;
        }

        //
        // REGION SQUASHING
        //
        Some((squash::cli::SQUASH_CMD, matches)) => {
            squash::handlers::run_squash(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../tests/data")
            .join(file_name)
            .display()
            .to_string()
    }

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_verbose_is_global() {
        let matches = build_parser()
            .try_get_matches_from(["cnvpair", "squash", "targets.bed", "-vv"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);
    }

    #[rstest]
    fn test_pair_requires_interval() {
        let result = build_parser().try_get_matches_from(["cnvpair", "pair", "a.cns", "b.cns"]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_run_pair_writes_table() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("paired.csv");
        let matches = build_parser()
            .try_get_matches_from([
                "cnvpair".to_string(),
                "pair".to_string(),
                get_test_path("first.cns"),
                get_test_path("second.cns"),
                "-i".to_string(),
                get_test_path("targets.bed"),
                "-o".to_string(),
                out.display().to_string(),
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        pair::handlers::run_pair(sub).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().nth(2), Some("chr1,600,700,B,3,2"));
        assert_eq!(text.lines().last(), Some("chr2,100,600,GENE2,0,0.5"));
    }

    #[rstest]
    fn test_run_squash_keeps_all_contigs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("genes.bed");
        let matches = build_parser()
            .try_get_matches_from([
                "cnvpair".to_string(),
                "squash".to_string(),
                get_test_path("targets.bed"),
                "-o".to_string(),
                out.display().to_string(),
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        squash::handlers::run_squash(sub).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            text,
            "chr1\t100\t500\tA\t2\nchr1\t600\t700\tB\t2\nchr2\t100\t600\tGENE2\t1\nchrX\t100\t900\tXGENE\t1\n"
        );
    }

    #[rstest]
    fn test_run_squash_twice_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let once = dir.path().join("once.bed");
        let twice = dir.path().join("twice.bed");
        std::fs::write(
            dir.path().join("rows.bed"),
            "chr1\t0\t25\tA\nchr1\t25\t50\tA\nchr1\t100\t400\tC\n",
        )
        .unwrap();

        for (input, output) in [(dir.path().join("rows.bed"), &once), (once.clone(), &twice)] {
            let matches = build_parser()
                .try_get_matches_from([
                    "cnvpair".to_string(),
                    "squash".to_string(),
                    input.display().to_string(),
                    "-o".to_string(),
                    output.display().to_string(),
                ])
                .unwrap();
            let (_, sub) = matches.subcommand().unwrap();
            squash::handlers::run_squash(sub).unwrap();
        }

        let first = std::fs::read_to_string(&once).unwrap();
        assert_eq!(first, "chr1\t0\t50\tA\t2\nchr1\t100\t400\tC\t1\n");
        assert_eq!(std::fs::read_to_string(&twice).unwrap(), first);
    }

    #[rstest]
    fn test_run_squash_rejects_unsorted_list() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("unsorted.bed");
        std::fs::write(&input, "chr1\t600\t700\tB\nchr1\t100\t300\tA\n").unwrap();
        let matches = build_parser()
            .try_get_matches_from([
                "cnvpair".to_string(),
                "squash".to_string(),
                input.display().to_string(),
                "-o".to_string(),
                dir.path().join("out.bed").display().to_string(),
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        let err = squash::handlers::run_squash(sub).unwrap_err();
        assert!(format!("{err:#}").contains("row 2"), "{err:#}");
        assert!(!dir.path().join("out.bed").exists());
    }

    #[rstest]
    fn test_run_collate_with_tsv_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("genes.tsv");
        let matches = build_parser()
            .try_get_matches_from([
                "cnvpair".to_string(),
                "collate".to_string(),
                "-s".to_string(),
                get_test_path("first.cns"),
                get_test_path("second.cns"),
                "-o".to_string(),
                out.display().to_string(),
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        collate::handlers::run_collate(sub).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        // B is listed twice in `first` and missing from `second`
        assert_eq!(text, "gene\tfirst\tsecond\nA\t1\t2\n");
    }
}
