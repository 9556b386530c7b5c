use std::path::PathBuf;

use cnvpair_aggregate::{AggregateConfig, cut_segments, pair_profiles, squash_regions};
use cnvpair_core::chrom::ContigPolicy;
use cnvpair_core::models::NamedRegion;
use cnvpair_io::{BedWrite, DEFAULT_VALUE_COL, Delimiter, TableWrite, read_profile, read_regions};
use pretty_assertions::assert_eq;
use rstest::*;

fn get_test_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tests/data")
        .join(file_name)
}

#[rstest]
fn test_pair_from_files() {
    let first = read_profile(get_test_path("first.cns"), DEFAULT_VALUE_COL).unwrap();
    let second = read_profile(get_test_path("second.cns"), DEFAULT_VALUE_COL).unwrap();
    let regions = read_regions(get_test_path("targets.bed")).unwrap();

    let table = pair_profiles(&first, &second, &regions, &AggregateConfig::default()).unwrap();

    let mut out: Vec<u8> = Vec::new();
    table.write_table(&mut out, Delimiter::Comma).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "chromosome,start,end,label,value1,value2\n\
         chr1,100,500,A,1.6666666666666667,2\n\
         chr1,600,700,B,3,2\n\
         chr2,100,600,GENE2,0,0.5\n"
    );
    assert_eq!(table.labels, vec!["first", "second"]);
}

#[rstest]
fn test_pair_written_to_gz_file() {
    let first = read_profile(get_test_path("first.cns"), DEFAULT_VALUE_COL).unwrap();
    let second = read_profile(get_test_path("second.cns"), DEFAULT_VALUE_COL).unwrap();
    let regions = read_regions(get_test_path("targets.bed")).unwrap();
    let table = pair_profiles(&first, &second, &regions, &AggregateConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/paired.tsv.gz");
    table.write_table_to(Some(&path), Delimiter::Tab).unwrap();

    let reread = read_profile(&path, "value1").unwrap();
    assert_eq!(reread.len(), 3);
    assert_eq!(reread.intervals[1].value, 3.0);
}

#[rstest]
fn test_squash_keeps_sex_chromosomes_by_default_for_single_lists() {
    let regions = read_regions(get_test_path("targets.bed")).unwrap();
    let config = AggregateConfig {
        contigs: ContigPolicy::All,
        ..AggregateConfig::default()
    };
    let squashed = squash_regions(&regions, &config);
    let names: Vec<&str> = squashed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "GENE2", "XGENE"]);
}

#[rstest]
fn test_squash_survives_its_own_bed_output() {
    let rows = vec![
        NamedRegion::new("chr1", 0, 25, "A").unwrap(),
        NamedRegion::new("chr1", 25, 50, "A").unwrap(),
        NamedRegion::new("chr1", 100, 400, "C").unwrap(),
    ];
    let config = AggregateConfig {
        contigs: ContigPolicy::All,
        ..AggregateConfig::default()
    };
    let once = squash_regions(&rows, &config);
    assert_eq!(once.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("squashed.bed");
    once.write_bed(Some(&path)).unwrap();
    let reread = read_regions(&path).unwrap();
    assert_eq!(reread, once);
    assert_eq!(squash_regions(&reread, &config), once);
}

#[rstest]
fn test_cut_from_files() {
    let first = read_profile(get_test_path("first.cns"), DEFAULT_VALUE_COL).unwrap();
    let second = read_profile(get_test_path("second.cns"), DEFAULT_VALUE_COL).unwrap();

    let table = cut_segments(&first, &second, &AggregateConfig::default()).unwrap();
    let labels: Vec<&str> = table.rows.iter().map(|r| r.region.name.as_str()).collect();
    // 2:0-1000 has only 5 probes
    assert_eq!(labels, vec!["1:0-400", "1:400-700"]);
    assert_eq!(table.rows[0].values, vec![Some(1.0), Some(2.0)]);
}
