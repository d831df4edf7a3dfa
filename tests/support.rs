use std::fs;
use std::path::Path;
use std::process::{Command, Output};

pub const BIN: &str = env!("CARGO_BIN_EXE_zap-severity");

pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn zap-severity")
}

pub fn report_with_codes(codes: &[&str]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<OWASPZAPReport programName=\"ZAP\" version=\"2.14.0\">\n  <site name=\"http://app.local\">\n    <alerts>\n");
    for (i, code) in codes.iter().enumerate() {
        xml.push_str(&format!(
            "      <alertitem>\n        <pluginid>{}</pluginid>\n        <riskcode>{}</riskcode>\n      </alertitem>\n",
            10000 + i,
            code
        ));
    }
    xml.push_str("    </alerts>\n  </site>\n</OWASPZAPReport>\n");
    xml
}

pub fn write_report(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write report");
    path
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
