use chess_rules::game::GameConfig;
use chess_rules::protocol;

fn main() {
    env_logger::init();

    if let Err(e) = protocol::run_stdio(GameConfig::default()) {
        log::error!("protocol loop stopped: {e}");
        std::process::exit(1);
    }
}
