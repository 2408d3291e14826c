#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

mod atoms;
mod client;
mod config;
mod desktop;
mod events;
mod focus;
mod grab;
mod layout;
mod monitor;
mod status;
mod wm;

use env_logger::WriteStyle::Auto;
use libc::c_int;
use x11::xlib::XEvent;

use wm::Wm;

fn print_usage_and_exit(code: i32) -> ! {
    eprintln!("usage: {} [-v]", env!("CARGO_PKG_NAME"));
    std::process::exit(code);
}

fn parse_args() {
    let mut args = std::env::args().skip(1);
    match args.next() {
        None => {}
        Some(ref a) if a == "-v" => {
            println!("{}-{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Some(_) => print_usage_and_exit(1),
    }
    if args.next().is_some() {
        print_usage_and_exit(1);
    }
}

/// Reaps every terminated child non-blockingly, so spawned programs never pile up as
/// zombies; installed once at startup and left for the process's whole lifetime.
extern "C" fn reap_children(_signum: c_int) {
    loop {
        let pid = unsafe { libc::waitpid(-1, std::ptr::null_mut(), libc::WNOHANG) };
        if pid <= 0 {
            break;
        }
    }
}

fn install_sigchld_handler() {
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = reap_children as usize;
        libc::sigemptyset(&mut action.sa_mask);
        action.sa_flags = libc::SA_RESTART;
        libc::sigaction(libc::SIGCHLD, &action, std::ptr::null_mut());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    parse_args();

    env_logger::builder()
        .format_timestamp(None)
        .write_style(Auto)
        .init();
    info!("starting logger OK");

    install_sigchld_handler();

    let mut wm = Wm::init()?;
    info!("display server connection OK");

    while wm.running {
        let mut event: XEvent = unsafe { std::mem::zeroed() };
        unsafe { x11::xlib::XNextEvent(wm.display, &mut event) };

        events::dispatch(&mut wm, &event);

        unsafe { x11::xlib::XFlush(wm.display) };
        if !wm.connection_ok() {
            error!("lost connection to display server");
            break;
        }
    }

    wm.shutdown();
    info!("finished OK");
    Ok(())
}
