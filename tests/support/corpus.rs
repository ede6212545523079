use std::path::Path;

use sentiboard::corpus::CorpusPaths;

/// Write the four corpus files under `root/thai_nlp`, one entry per line.
pub fn write_corpus(
    root: &Path,
    train: &[(&str, &str)],
    test: &[(&str, &str)],
) -> CorpusPaths {
    let dir = root.join("thai_nlp");
    std::fs::create_dir_all(&dir).expect("create corpus dir");
    let paths = CorpusPaths {
        train_text: dir.join("train.txt"),
        train_labels: dir.join("train_label.txt"),
        test_text: dir.join("test.txt"),
        test_labels: dir.join("test_label.txt"),
    };
    write_column(&paths.train_text, train.iter().map(|(text, _)| *text));
    write_column(&paths.train_labels, train.iter().map(|(_, label)| *label));
    write_column(&paths.test_text, test.iter().map(|(text, _)| *text));
    write_column(&paths.test_labels, test.iter().map(|(_, label)| *label));
    paths
}

pub fn write_column<'a>(path: &Path, lines: impl Iterator<Item = &'a str>) {
    let mut body = String::new();
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    std::fs::write(path, body).expect("write corpus file");
}
