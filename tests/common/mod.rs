use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&work).expect("create work dir");

        write_fixture_topics(&work);

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("artgen");
        cmd.current_dir(&self.work)
            .env("HOME", &self.home)
            .env("JINA_API_KEY", "test-fetch-key");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn article_dir(&self, slug: &str) -> PathBuf {
        self.work.join("articles").join(slug)
    }

    pub fn read_json(&self, path: &Path) -> Value {
        let raw = fs::read_to_string(path).expect("read json file");
        serde_json::from_str(&raw).expect("parse json file")
    }

    pub fn write_topics(&self, topics: Value) {
        let doc = serde_json::json!({ "topics": topics });
        fs::write(
            self.work.join("article-topics.json"),
            serde_json::to_string_pretty(&doc).expect("serialize topics"),
        )
        .expect("write topics file");
    }
}

pub fn write_fixture_topics(work: &Path) {
    let doc = serde_json::json!({
        "topics": [
            {
                "title": "Best Roof Rack Accessories",
                "slug": "best-roof-rack-accessories",
                "keywords": ["roof rack"],
                "target_products": ["p1"],
                "target_collections": ["c1"],
                "description": "d"
            },
            {
                "title": "Cat Containment For Small Yards",
                "slug": "cat-containment-small-yards",
                "keywords": ["cat fence", "small yard"],
                "target_products": ["oscillot-kit"],
                "target_collections": ["diy-kits"],
                "description": "Keeping cats safe in compact outdoor spaces."
            }
        ]
    });
    fs::write(
        work.join("article-topics.json"),
        serde_json::to_string_pretty(&doc).expect("serialize topics"),
    )
    .expect("write topics file");
}
