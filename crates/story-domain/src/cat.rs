/// Gato con el estado mínimo que las historias observan.
#[derive(Debug, PartialEq, Eq)]
pub struct Cat {
    age: i64,
    hours_alone: i64,
    kaki: i64,
}

impl Cat {
    pub fn new(age: i64) -> Self {
        Self { age,
               hours_alone: 0,
               kaki: 0 }
    }

    /// Constructor de copia usado por los snapshots.
    pub fn copy_of(other: &Cat) -> Cat {
        Cat { age: other.age,
              hours_alone: other.hours_alone,
              kaki: other.kaki }
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn not_taken_for_a_walk(&mut self, hours: i64) {
        self.hours_alone += hours;
    }

    pub fn did_kaki(&mut self, size: i64) {
        self.kaki += size;
    }

    pub fn kaki(&self) -> i64 {
        self.kaki
    }

    pub fn house_condition(&self) -> &'static str {
        match (self.kaki, self.hours_alone) {
            (0, h) if h < 4 => "clean",
            (0, _) => "messy",
            _ => "dirty",
        }
    }
}
