fn main() {
    blackjack_ev::cli::run();
}
