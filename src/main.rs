fn main() {
    cookie_export::cli::run();
}
