fn main() {
    throwing_knives::game::run();
}
