fn main() {
    blaster::game::run();
}
