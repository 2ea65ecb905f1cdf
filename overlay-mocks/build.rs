use std::path::Path;
use std::process::Command;

fn main() {
    copy_shared_assets();
    generate_tailwind();
}

fn copy_shared_assets() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let shared_main_css = Path::new(manifest_dir).join("../overlay-ui/assets/main.css");
    let local_main_css = Path::new(manifest_dir).join("assets/main.css");

    println!("cargo:rerun-if-changed={}", shared_main_css.display());

    if shared_main_css.exists() {
        std::fs::copy(&shared_main_css, &local_main_css)
            .expect("Failed to copy main.css from overlay-ui");
    }
}

fn generate_tailwind() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!(
        "cargo:rerun-if-changed={}",
        Path::new(manifest_dir).join("../overlay-ui/src").display()
    );

    // Use node_modules/.bin/tailwindcss directly - more reliable than npx in CI
    let tailwind_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {
            println!("cargo:warning=Tailwind CSS generated successfully");
        }
        Ok(output) => {
            eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
            panic!("Tailwind CSS generation failed");
        }
        // No local tailwind install: keep the asset! path valid with an empty sheet
        Err(e) => {
            println!("cargo:warning=tailwindcss not found ({e}), writing empty tailwind.css");
            if !tailwind_output.exists() {
                std::fs::write(&tailwind_output, "").expect("Failed to write tailwind.css");
            }
        }
    }
}
