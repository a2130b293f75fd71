use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Writes an executable `#!/bin/sh` script into `dir`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Lays out `<root>/<env>/bin/activate`, which restricts PATH to the env's bin
/// directory. Returns the path kraken would have inside the env.
pub fn fake_virtualenv(root: &Path, env_name: &str, with_kraken: bool) -> PathBuf {
    let bin = root.join(env_name).join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::write(
        bin.join("activate"),
        format!("PATH=\"{}\"\nexport PATH\n", bin.display()),
    )
    .unwrap();

    let kraken = bin.join("kraken");
    if with_kraken {
        write_script(&bin, "kraken", "exit 0");
    }
    kraken
}
