#[derive(Default, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Sequence {
    value: u64,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(u64) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }

    pub fn set(&mut self, value: u64) {
        self.value = value;
    }

    pub fn register(&mut self, id: u64) {
        if id > self.value {
            self.value = id
        }
    }
}
