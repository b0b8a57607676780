use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn ahora_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ahora").unwrap();
    cmd.env_remove("AHORA_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `content/diary/<slug>.mdx` under a site root
#[allow(dead_code)]
pub fn write_entry(root: &Path, slug: &str, front_matter: &str) {
    let dir = root.join("content").join("diary");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(format!("{}.mdx", slug)),
        format!("---\n{}\n---\n\nNotes for {}.\n", front_matter.trim(), slug),
    )
    .unwrap();
}
