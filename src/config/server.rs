pub const PORT: u16 = 3000;
