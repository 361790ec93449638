use clap::Parser;
use dexview::{Cli, run};

fn main() -> anyhow::Result<()> {
    // Restore default SIGPIPE behavior so piping into `head` etc. doesn't panic
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    let cli = Cli::parse();
    run(cli)
}
