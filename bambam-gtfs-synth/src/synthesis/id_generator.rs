/// allocates feed identifiers. stop and trip ids are sequential decimal strings,
/// each with its own counter starting at "0".
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    next_stop: usize,
    next_trip: usize,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_stop_id(&mut self) -> String {
        let id = self.next_stop;
        self.next_stop += 1;
        id.to_string()
    }

    pub fn next_trip_id(&mut self) -> String {
        let id = self.next_trip;
        self.next_trip += 1;
        id.to_string()
    }
}
