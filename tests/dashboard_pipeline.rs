mod support;

use support::{corpus::write_corpus, sentiboard_env::SentiboardEnvGuard};

use sentiboard::config::{self, AppConfig, DashboardSettings};
use sentiboard::corpus::{CorpusError, FallbackEncoding};
use sentiboard::dataset::{DatasetError, Split};
use sentiboard::{
    DashboardError, DashboardView, Label, Selection, SentimentName, filter_and_score, load_dataset,
};

const TRAIN: &[(&str, &str)] = &[
    ("good", "pos"),
    ("bad weather today", "neg"),
    ("  ร้านนี้อร่อยมาก  ", "pos"),
    ("", "neu"),
    ("เปิดกี่โมง", "q"),
];
const TEST: &[(&str, &str)] = &[("so so", "neu"), ("awful service", "neg")];

#[test]
fn loads_assembles_and_scores_corpus() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = write_corpus(temp.path(), TRAIN, TEST);

    let dataset = load_dataset(&paths, FallbackEncoding::Latin1).expect("load dataset");
    assert_eq!(dataset.len(), TRAIN.len() + TEST.len());
    assert_eq!(dataset.split_len(Split::Train), 5);
    assert_eq!(dataset.split_len(Split::Test), 2);

    let records = dataset.records();
    assert_eq!(records[1].text, "bad weather today");
    assert_eq!(records[1].word_count, 3);
    assert_eq!(records[2].text, "ร้านนี้อร่อยมาก");
    assert_eq!(records[3].text, "");
    assert_eq!(records[3].word_count, 0);
    assert_eq!(records[6].split, Split::Test);

    let (view, metrics) = filter_and_score(&dataset, &Selection::empty());
    assert_eq!(view.len(), dataset.len());
    // pos 2 + neg 0 + pos 2 + neu 1 + q 0 + neu 1 + neg 0 = 6 over 14.
    assert_eq!(metrics.score, Some(0.43));
    // neg, neu and pos tie at two records each; the lowest code wins.
    assert_eq!(metrics.modal_label, Some(Label::Neg));

    let questions: Selection = [SentimentName::Pregunta].into_iter().collect();
    let (view, metrics) = filter_and_score(&dataset, &questions);
    assert_eq!(view.len(), 1);
    assert_eq!(metrics.score, Some(0.0));
    assert_eq!(metrics.modal_label, Some(Label::Q));
}

#[test]
fn latin1_corpus_falls_back_and_strict_mode_fails() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = write_corpus(temp.path(), &[("placeholder", "pos")], &[]);
    std::fs::write(&paths.train_text, b"me gust\xf3 mucho\n").expect("write latin1");

    let dataset = load_dataset(&paths, FallbackEncoding::Latin1).expect("fallback load");
    assert_eq!(dataset.records()[0].text, "me gustó mucho");
    assert_eq!(dataset.records()[0].length, 14);

    let err = load_dataset(&paths, FallbackEncoding::None).expect_err("strict load");
    assert!(matches!(
        err,
        DashboardError::Corpus(CorpusError::Decode { .. })
    ));
}

#[test]
fn missing_corpus_file_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = write_corpus(temp.path(), TRAIN, TEST);
    std::fs::remove_file(&paths.test_text).expect("remove test text");

    match load_dataset(&paths, FallbackEncoding::Latin1) {
        Err(DashboardError::Corpus(CorpusError::FileNotFound { path })) => {
            assert_eq!(path, paths.test_text)
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn misaligned_labels_are_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = write_corpus(temp.path(), TRAIN, TEST);
    std::fs::write(&paths.train_labels, "pos\nneg\n").expect("truncate labels");

    match load_dataset(&paths, FallbackEncoding::Latin1) {
        Err(DashboardError::Dataset(DatasetError::MisalignedLengths {
            split,
            texts,
            labels,
        })) => {
            assert_eq!(split, Split::Train);
            assert_eq!(texts, 5);
            assert_eq!(labels, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn config_in_app_dir_drives_the_dashboard() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_home = temp.path().join("config");
    let _env = SentiboardEnvGuard::set_config_home(config_home.clone());
    write_corpus(temp.path(), TRAIN, TEST);

    let mut app_config = AppConfig::default();
    app_config.corpus.data_dir = Some(temp.path().to_path_buf());
    app_config.dashboard = DashboardSettings {
        default_selection: vec![SentimentName::Positivo, SentimentName::Neutral],
        histogram_max_bins: 5,
        density_steps: 16,
    };
    config::save(&app_config).expect("save config");
    assert!(config_home.join(".sentiboard").join("config.toml").is_file());

    let loaded = config::load_or_default().expect("load config");
    assert_eq!(loaded, app_config);

    let dataset = load_dataset(&loaded.corpus.paths(), loaded.corpus.fallback_encoding)
        .expect("load dataset");
    let selection = loaded.dashboard.default_selection();
    let view = DashboardView::build(&dataset, &selection, &loaded.dashboard);
    assert_eq!(view.metrics.count, 4);
    // pos 2 + pos 2 + neu 1 + neu 1 = 6 over 8.
    assert_eq!(view.metrics.score, Some(0.75));
    assert!(view.charts.length_histogram.bins.len() <= 5);
    assert_eq!(view.charts.length_histogram.total(), 4);
    for distribution in &view.charts.distributions {
        assert_eq!(distribution.series.len(), 4);
        for series in &distribution.series {
            assert_eq!(series.density.len(), 16);
        }
    }

    let json: serde_json::Value =
        serde_json::from_str(&view.to_json().expect("json")).expect("parse json");
    assert_eq!(json["metrics"]["count"], 4);
    assert_eq!(json["selection"], serde_json::json!(["Positivo", "Neutral"]));
}
