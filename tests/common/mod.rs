#![allow(dead_code)]

//! A byte builder that writes saves the way the game lays them out, used to
//! produce fixtures without shipping binary saves.

#[derive(Debug, Default, Clone)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    pub fn new() -> Self {
        Bytes::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn raw(&mut self, data: &[u8]) -> &mut Self {
        self.0.extend_from_slice(data);
        self
    }

    pub fn u8(&mut self, x: u8) -> &mut Self {
        self.raw(&[x])
    }

    pub fn bool(&mut self, x: bool) -> &mut Self {
        self.u8(u8::from(x))
    }

    pub fn i16(&mut self, x: i16) -> &mut Self {
        self.raw(&x.to_le_bytes())
    }

    pub fn i32(&mut self, x: i32) -> &mut Self {
        self.raw(&x.to_le_bytes())
    }

    pub fn u32(&mut self, x: u32) -> &mut Self {
        self.raw(&x.to_le_bytes())
    }

    pub fn i64(&mut self, x: i64) -> &mut Self {
        self.raw(&x.to_le_bytes())
    }

    pub fn u64(&mut self, x: u64) -> &mut Self {
        self.raw(&x.to_le_bytes())
    }

    pub fn f32(&mut self, x: f32) -> &mut Self {
        self.raw(&x.to_le_bytes())
    }

    pub fn f64(&mut self, x: f64) -> &mut Self {
        self.raw(&x.to_le_bytes())
    }

    pub fn i32s(&mut self, xs: &[i32]) -> &mut Self {
        for x in xs {
            self.i32(*x);
        }
        self
    }

    /// A count followed by the values
    pub fn prefixed(&mut self, xs: &[i32]) -> &mut Self {
        self.i32(xs.len() as i32).i32s(xs)
    }

    pub fn string(&mut self, s: &str) -> &mut Self {
        self.u8(s.len() as u8).raw(s.as_bytes())
    }

    pub fn bools(&mut self, xs: &[bool]) -> &mut Self {
        for x in xs {
            self.bool(*x);
        }
        self
    }

    pub fn i64s(&mut self, xs: &[i64]) -> &mut Self {
        for x in xs {
            self.i64(*x);
        }
        self
    }

    pub fn vec3(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.f32(x).f32(y).f32(z)
    }

    pub fn vec_lf3(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.f64(x).f64(y).f64(z)
    }

    pub fn quat(&mut self) -> &mut Self {
        self.f32(0.0).f32(0.0).f32(0.0).f32(1.0)
    }

    /// Overwrites eight bytes at `at`
    pub fn patch_i64(&mut self, at: usize, x: i64) -> &mut Self {
        self.0[at..at + 8].copy_from_slice(&x.to_le_bytes());
        self
    }
}

/// A save assembled from a handful of knobs. Every factory and sphere pool
/// holds one record from the encoders below.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub screenshot: Vec<u8>,

    /// Vein amount tables of each factory
    pub factories: Vec<Vec<i64>>,

    /// Sail counts of each star's dyson sphere, `None` for stars without one
    pub stars: Vec<Option<u32>>,
}

impl Default for Fixture {
    fn default() -> Self {
        Fixture {
            name: "Lindholm",
            screenshot: b"\x89PNG\r\n".to_vec(),
            factories: Vec::new(),
            stars: Vec::new(),
        }
    }
}

/// Offsets of interesting version tags within an encoded fixture
#[derive(Debug, Default)]
pub struct Marks {
    pub game_data: usize,
    pub game_desc: usize,
    pub player: usize,
    pub factories: Vec<usize>,
    pub power_systems: Vec<usize>,
    pub spheres: Vec<usize>,
    pub swarms: Vec<usize>,
    pub markers: Vec<usize>,
}

impl Fixture {
    pub fn encode(&self) -> Vec<u8> {
        self.encode_with_marks().0
    }

    pub fn encode_with_marks(&self) -> (Vec<u8>, Marks) {
        let mut marks = Marks::default();
        let mut b = Bytes::new();
        b.raw(b"VFSAVE").i64(0).i32(4).i32s(&[0, 9, 27]);
        b.i64(1_000_000).i64(637_500_000_000_000_000);
        b.i32(self.screenshot.len() as i32).raw(&self.screenshot);

        marks.game_data = b.len();
        b.i32(2).string(self.name);
        marks.game_desc = b.len();
        game_desc(&mut b);
        b.i64(1_000_000);
        prefs(&mut b);
        history(&mut b);
        b.bool(false).bool(false);
        stats(&mut b);
        b.i32(103);
        marks.player = b.len();
        player(&mut b);

        b.i32(self.factories.len() as i32);
        b.i32(0); // galactic transport
        for (i, veins) in self.factories.iter().enumerate() {
            marks.factories.push(b.len());
            factory(&mut b, 100 + i as i32 + 1, veins, &mut marks);
        }

        b.i32(self.stars.len() as i32);
        for (i, star) in self.stars.iter().enumerate() {
            match star {
                None => {
                    b.i32(0);
                }
                Some(sails) => {
                    b.i32(i as i32 + 1);
                    marks.spheres.push(b.len());
                    sphere(&mut b, *sails, 1, &mut marks);
                }
            }
        }

        let len = b.len() as i64;
        b.patch_i64(6, len);
        (b.into_inner(), marks)
    }
}

pub fn storage(b: &mut Bytes, id: i32, grids: &[[i32; 4]]) {
    b.i32(1).i32(id).i32s(&[0, 0, 0, 0, 0]);
    b.i32(0); // kind
    b.i32(grids.len() as i32).i32(0);
    for grid in grids {
        b.i32s(grid);
    }
}

fn game_desc(b: &mut Bytes) {
    b.i32(2).i32s(&[20200101, 1_234_567, 64, 1]).f32(1.0);
    b.prefixed(&[1, 8, 9]);
}

fn prefs(b: &mut Bytes) {
    b.i32(2).vec_lf3(0.0, 0.0, 0.0).quat().i32(1);
    b.i32(2).i32s(&[1101, 1, 1102, 2]);
    b.bool(true).bool(true).bool(false).bool(true).bool(true);
    b.prefixed(&[]);
}

fn history(b: &mut Bytes) {
    b.i32(2).prefixed(&[1, 2]).prefixed(&[]).prefixed(&[]);
    b.i32(1).i32(1001).bool(true).i32(1).i32(1).i64(1200).i64(1200);
    b.bool(false).i32(0).prefixed(&[]).i32(0);
    b.f32(5400.0).f32(0.7).bool(false).i32(1);
    b.f32(8.0).f32(1.0).i32(25);
    b.f32(400.0).f32(100000.0).f32(1.0).bool(false).i32(200);
    b.f32(1.0).f32(1.0).i32(1).i32(1).i32(1).f32(0.0);
    b.i64(0).bool(false);
}

fn stats(b: &mut Bytes) {
    b.i32(0).prefixed(&[]);
    b.i32(0).i32(1);
    production_stat(b);
    b.prefixed(&[1101]).prefixed(&[]);
}

fn player(b: &mut Bytes) {
    b.i32(1).i32(103).vec3(0.0, 200.0, 0.0);
    b.vec_lf3(1.0, 2.0, 3.0).quat().i32(0).f32(0.0).bool(false);
    b.vec_lf3(0.0, 0.0, 0.0).i32(0).i32(0);
    mecha(b);
    storage(b, 1, &[[1001, 0, 20, 100], [0, 0, 0, 100]]);
    navigation(b);
    b.i32(1000);
}

fn mecha(b: &mut Bytes) {
    b.i32(0);
    for x in &[6e7, 5e7, 1.8e5, 0.0, 0.0] {
        b.f64(*x);
    }
    b.i32(0);
    storage(b, 2, &[[0, 0, 0, 100]]);
    storage(b, 3, &[[0, 0, 0, 100]]);
    for _ in 0..10 {
        b.f64(1.0);
    }
    b.i32(0).i32(0);
    for _ in 0..7 {
        b.f32(1.0);
    }
    b.i32(0).prefixed(&[]); // forge
    b.i32(0).i32(0); // lab
    b.i32(1).f32(6.0).i32(0);
    mecha_drone(b);
}

fn navigation(b: &mut Bytes) {
    b.i32(0).bool(false).i32(0).vec_lf3(0.0, 0.0, 0.0);
    b.bool(false).bool(false).bool(false).i32(0);
    b.f64(0.0).f64(0.0).f64(0.0).f64(0.0);
}

fn factory(b: &mut Bytes, planet_id: i32, veins: &[i64], marks: &mut Marks) {
    b.i32(1).i32(planet_id);
    b.i32(2).raw(&[9, 8]); // mod data
    b.i32(veins.len() as i32).i64s(veins);
    b.i32(1);
    vein_group(b, 1, 4800);

    b.i32s(&[256, 2, 1]);
    entity(b, 1);
    anim(b);
    sign(b);
    b.i32s(&(16..32).collect::<Vec<i32>>());
    b.i32(7);

    b.i32s(&[256, 2, 0]);
    prebuild(b, 1);
    b.i32s(&[0; 16]);

    b.i32s(&[256, 2, 0]);
    vege(b, 1);

    b.i32s(&[256, 2, 0]);
    vein(b, 1, 7, 900_000);
    anim(b);

    b.i32(0).i32s(&[2, 1, 0, 1]);
    cargo(b, 1101);
    b.i32s(&[1, 0]);

    b.i32(0).i32s(&[2, 256, 0, 2, 64, 0, 2, 64, 1]);
    belt(b, 1);
    splitter(b, 1);
    b.i32(1);
    cargo_path(b, 1);
    b.i32(2);

    b.i32(0).i32s(&[3, 64, 1]);
    b.i32(1).i32(4);
    storage(b, 1, &[[1101, 0, 30, 50], [0, 0, 0, 50], [0, 0, 0, 50], [0, 0, 0, 50]]);
    b.i32(0); // slot two is empty
    b.i32(2);
    b.i32s(&[64, 2, 0]);
    tank(b, 1);

    marks.power_systems.push(b.len());
    b.i32(0);
    b.i32s(&[64, 2, 0]);
    generator(b, 1);
    b.i32s(&[64, 2, 0]);
    power_node(b, 1);
    b.i32s(&[64, 2, 0]);
    consumer(b, 1);
    b.i32s(&[64, 2, 0]);
    accumulator(b, 1);
    b.i32s(&[64, 2, 0]);
    exchanger(b, 1);
    b.i32s(&[8, 2, 0]).i32(0).i32(1); // slot zero of the networks is written empty
    power_network(b, 1);

    b.i32(0);
    b.i32s(&[64, 2, 0]);
    miner(b, 1);
    b.i32s(&[64, 2, 0]);
    inserter(b, 1);
    b.i32s(&[64, 2, 0]);
    assembler(b, 1, 2);
    b.i32s(&[64, 2, 0]);
    fractionator(b, 1);
    b.i32s(&[64, 2, 0]);
    ejector(b, 1);
    b.i32s(&[64, 2, 0]);
    silo(b, 1);
    b.i32s(&[64, 2, 1]);
    lab(b, 1);
    b.i32(3);

    b.i32(0).i32s(&[2, 32, 0]).i32(1);
    station(b, 1, 1, Some("Mall"));

    b.i32(0).i32s(&[16, 2, 1]);
    monster(b, 1);
    b.i32(5);

    b.i32(0).i32(3).raw(&[1, 2, 3]).i32(2).u32(0).u32(3); // platform
}

/// `auto_flag` gates the second of two auto node slots. The node behind it
/// is written regardless.
pub fn sphere(b: &mut Bytes, sails: u32, auto_flag: i32, marks: &mut Marks) {
    b.i32(2).i32(42);

    marks.swarms.push(b.len());
    b.i32(4).i32(42).i32(512).i32(sails as i32).i32(0);
    for i in 0..sails {
        b.f32(i as f32).vec3(1.0, 0.0, 0.0).vec3(0.0, 1.0, 0.0).f32(0.5);
    }
    for i in 0..sails {
        b.u32(1).u32(0).u32(36000 + i).vec3(0.0, 0.0, 1.0);
    }
    b.i32(4).i32(2);
    b.i32(0).i32(1).f32(4000.0).quat().vec3(0.0, 1.0, 0.0).i32(0).bool(true); // orbit 1
    b.i32s(&[1, 0, 1]);
    expiry_order(b);
    b.i32s(&[1, 0, 1]);
    absorb_order(b);
    b.i32s(&[64, 2, 0]);
    sail_bullet(b, 1);

    marks.markers.push(b.len());
    b.i32(1212).i32(1).i32(2);
    b.i32(1);
    layer(b, 1);
    b.i32s(&[64, 2, 1]);
    rocket(b, 1);
    b.i32(2);
    b.i32(1).i32(2).i32(0).i32(auto_flag).i32s(&[1, 3]); // auto nodes
    b.i32s(&[64, 1, 0]);
    node_render(b, 1);
}

fn layer(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).f32(4000.0).quat().f32(0.1).f32(0.0).quat().quat().i32(0);

    b.i32s(&[64, 2, 0]).i32(1);
    dyson_node(b, 1, id);

    b.i32s(&[64, 3, 1]).i32(1);
    dyson_frame(b, 1, id);
    b.i32(0).i32(2);

    b.i32s(&[64, 2, 0]).i32(1);
    dyson_shell(b, 1, id);
}

pub fn vein_group(b: &mut Bytes, kind: i32, amount: i64) {
    b.i32(kind).vec3(0.0, 1.0, 0.0).i32(4).i64(amount);
}

/// Component ids count up from `id * 100` in declaration order
pub fn entity(b: &mut Bytes, id: i32) {
    b.u8(0).i32(id).i16(2001).i16(37);
    b.vec3(1.0, 2.0, 3.0).quat();
    for i in 0..18 {
        b.i32(id * 100 + i);
    }
}

pub fn anim(b: &mut Bytes) {
    b.f32(0.5).f32(1.0).f32(2.0).u32(3).f32(0.75);
}

pub fn sign(b: &mut Bytes) {
    b.u32(1).u32(2).u32(1101).u32(1102).u32(1103).u32(1104);
    b.f32(1.0).f32(2.0).f32(3.0).f32(4.0);
    b.f32(0.5).f32(1.5).f32(2.5).f32(3.5);
}

pub fn prebuild(b: &mut Bytes, id: i32) {
    b.u8(0).i32(id).i16(2101).i16(40);
    b.vec3(1.0, 0.0, 0.0).quat().vec3(0.0, 1.0, 0.0).quat();
    b.i32(7).i16(-1).i16(2).i32(5).i32(1101);
    b.prefixed(&[3, 4]);
}

pub fn vege(b: &mut Bytes, id: i32) {
    b.u8(0).i32(id).i16(1021).i16(12).i16(20);
    b.vec3(4.0, 5.0, 6.0).quat().vec3(1.0, 1.5, 2.0);
}

pub fn vein(b: &mut Bytes, id: i32, kind: i16, amount: i32) {
    b.u8(0).i32(id).i16(kind).i16(3).i16(1).i32(amount).i32(1001);
    b.vec3(0.0, 200.0, 0.0).i32s(&[1, 33, 0, 0, 0]);
}

pub fn cargo(b: &mut Bytes, item: i32) {
    b.i32(item).vec3(0.0, 1.0, 0.0).quat();
}

pub fn belt(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32s(&[2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

pub fn splitter(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100);
    b.i32s(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    b.bool(true).bool(false).i32(1101);
}

pub fn cargo_path(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32s(&[2048, 2, 64, 1, 0]).bool(false);
    b.i32s(&[0, 0, 1, 1]);
    b.raw(&[0xff, 0x00]);
    b.i32s(&[0, 2, 1]);
    b.vec3(1.0, 0.0, 0.0).quat().vec3(2.0, 0.0, 0.0).quat();
    b.i32(9).i32(4);
}

pub fn tank(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32s(&[3, 4, 5, 6, 7, 8]);
    b.bools(&[true, false, true, false]);
    b.i32s(&[1000, 250, 1000]);
    b.bools(&[false, true, true]);
}

pub fn generator(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(1);
    b.bools(&[true, false, false]);
    b.i64(1200).i64(300).i16(7).i64(900);
    b.i16(1120).i16(1121).i16(5).i64(4_000_000);
    b.i32s(&[1209, 12, 1208]).f32(0.5).i64(6_000_000);
    b.f32(0.25).f32(1.5).vec3(1.0, 2.0, 3.0);
}

pub fn power_node(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(1).bool(true);
    b.i32s(&[50_000, 2000, 3000]);
    b.vec3(1.0, 2.0, 3.0).f32(10.5).f32(20.5);
}

pub fn consumer(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(1);
    b.vec3(1.0, 2.0, 3.0).i64s(&[100, 200, 300, 400]);
}

pub fn accumulator(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(1).i64s(&[10, 20, 30, 40]);
}

pub fn exchanger(b: &mut Bytes, id: i32) {
    b.i32(1).i32(id).i32(id + 100).i32(1);
    b.i16(3).i16(4).f32(1.0).f32(0.5);
    b.i64s(&[10, 20, 30]);
    b.i32s(&[2206, 2207, 5, 6, 7, 8]);
    b.bools(&[true, false, true, false]);
    b.i32s(&[1, 2, 3, 4]);
}

/// One node holding a single consumer
pub fn power_network(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32s(&[1, 1, 0, 0, 0]);
    b.i32(0).i32(1).f32(0.0).f32(0.0).f32(0.0).f32(1.0).f32(1.0);
    b.i32s(&[0, 0, 0, 0, 0, 1]).i32(4);
    b.i32(4);
}

pub fn miner(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(3);
    b.i32(2).i32s(&[10_000, 5, 60, 7]).i32(1);
    b.prefixed(&[4, 5]);
    b.i32s(&[1, 20, 1001, 3]).u32(0xdead_beef);
}

pub fn inserter(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(3);
    b.i32(1).i32s(&[10_000, 20, 30, 40, 11, 12]);
    b.bool(true).bool(false).i16(1).i16(2);
    b.i32s(&[1101, 1102, 3, 4]);
    b.vec3(1.0, 2.0, 3.0).quat().i16(5).i16(6);
}

/// An assembler with a recipe in progress when `recipe_id` is positive
pub fn assembler(b: &mut Bytes, id: i32, recipe_id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(3).bool(true).bool(false);
    b.i32(10_000).i32(5).i32(recipe_id);
    if recipe_id > 0 {
        b.i32(4).i32(60);
        b.prefixed(&[1001]).prefixed(&[1]).prefixed(&[0]).prefixed(&[0]);
        b.prefixed(&[1101]).prefixed(&[1]).prefixed(&[0]);
    }
}

pub fn fractionator(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(3).i32s(&[11, 12, 13]);
    b.bools(&[false, true, false, true]).f32(0.01);
    b.i32s(&[1120, 1121, 5, 6, 7, 8]);
    b.bool(true).bool(false);
    b.i32s(&[20, 21, 22]).u32(42);
}

pub fn ejector(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32s(&[103, 3, 1, 2]).bool(true);
    b.i32s(&[4, 5, 1501, 10, 1]).f32(1.5).f32(2.5);
    b.vec3(0.0, 1.0, 0.0).f32(0.5).quat().vec3(0.0, 0.0, 1.0);
}

pub fn silo(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32s(&[103, 3, 1, 2]).bool(false);
    b.i32s(&[4, 5, 1503, 10, 6]).bool(true);
    b.vec3(1.0, 2.0, 3.0).quat();
}

/// A lab researching with blue matrices
pub fn lab(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).i32(3).i32(2);
    b.bool(true).bool(false).i32(5).i32(6).bool(true).i32(0).i32(1001);
    b.prefixed(&[6001]).prefixed(&[1]).prefixed(&[6001]);
}

/// The name is written whenever one is given, whatever the flag
pub fn station(b: &mut Bytes, id: i32, flag: i32, name: Option<&str>) {
    b.i32(2).i32(id).i32(id + 100).i32s(&[12, 103, 4, 0]);
    b.vec3(0.0, 0.0, 0.0).vec3(0.0, 0.0, 0.0).quat();
    b.bool(true).i32(flag);
    if let Some(name) = name {
        b.string(name);
    }
    b.i64(0).i64(0).i64(12_000_000_000);
    b.i32s(&[0, 100, 49, 1, 50]);
    drone(b);
    local_order(b);
    b.i32s(&[9, 1]).u64(0).u64(1).i32(10);
    ship(b);
    remote_order(b);
    b.i32(1).i32(0).i32s(&[1120, 500, 0, 0, 5000, 1, 2]);
    b.i32(1).i32s(&[1, 21, 0, 3]);
    b.i32s(&[0, 0, 1]).bool(false);
    b.prefixed(&[]).i32(0).i32(0);
    b.i32(0).f64(3000.0).f64(2.4e6).bool(true).f64(12e5).bool(true).i32(10).i32(5);
}

pub fn drone(b: &mut Bytes) {
    b.i32(0).vec3(1.0, 2.0, 3.0).vec3(4.0, 5.0, 6.0).i32(7);
    b.f32(1.0).f32(2.0).f32(0.5).i32s(&[1101, 10, 8]);
}

pub fn local_order(b: &mut Bytes) {
    b.i32(0).i32s(&[2, 0, 1, 1101, 10, -10]);
}

pub fn ship(b: &mut Bytes) {
    b.i32(0).i32s(&[1, 103, 104]);
    b.vec_lf3(1.0, 2.0, 3.0).vec3(0.0, 0.0, 1.0).f32(400.0).f32(0.25);
    b.quat().vec3(0.0, 1.0, 0.0).f32(0.5);
    b.vec_lf3(4.0, 5.0, 6.0).quat();
    b.i32(201).i32(1).f32(0.75);
    b.i32s(&[1102, 100, 9, 0, 1]);
}

pub fn remote_order(b: &mut Bytes) {
    b.i32(0).i32s(&[201, 0, 2, 1102, 100, -100]);
}

pub fn monster(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(id + 100).f32(2.0);
    b.vec3(1.0, 0.0, 0.0).vec3(0.0, 1.0, 0.0).vec3(0.0, 0.0, 1.0);
    b.i32(1).f32(3.0).f32(0.5).f32(1.0).i32(2).f32(0.25);
}

pub fn production_stat(b: &mut Bytes) {
    b.i32(1).i32(4).i32(2);
    product_stat(b, 1101);
    b.i32(1);
    power_stat(b);
    b.prefixed(&[0, 1]).i64(5000);
}

pub fn product_stat(b: &mut Bytes, item_id: i32) {
    b.i32(0).prefixed(&[1, 2]).prefixed(&[3]).prefixed(&[4, 5]).i32(item_id);
}

pub fn power_stat(b: &mut Bytes) {
    b.i32(0).i32(2).i64s(&[10, 20]).prefixed(&[1]).i32(1).i64(30);
}

pub fn mecha_drone(b: &mut Bytes) {
    b.i32(0).i32(1).vec3(1.0, 2.0, 3.0).vec3(4.0, 5.0, 6.0).vec3(0.0, 0.0, 1.0);
    b.f32(8.0).i32(2).i32(33).f32(0.5).vec3(0.0, 1.0, 0.0);
}

pub fn expiry_order(b: &mut Bytes) {
    b.i64(36000).i32(0);
}

pub fn absorb_order(b: &mut Bytes) {
    b.i64(36500).i32s(&[1, 1, 1]);
}

pub fn sail_bullet(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).f32(0.5).f32(3.0).i32(1);
    b.vec3(1.0, 0.0, 0.0).vec3(2.0, 0.0, 0.0).vec3(3.0, 0.0, 0.0).vec3(4.0, 0.0, 0.0);
    b.vec_lf3(5.0, 0.0, 0.0).vec_lf3(6.0, 0.0, 0.0);
}

pub fn dyson_node(b: &mut Bytes, id: i32, layer: i32) {
    b.i32(4).i32(id).i32(1).i32(layer).bool(true).bool(false);
    b.vec3(0.0, 4000.0, 0.0);
    b.i32s(&[30, 31, 2, 3, 4, 5, 6, 7, 8]);
}

pub fn dyson_frame(b: &mut Bytes, id: i32, layer: i32) {
    b.i32(0).i32(id).i32(2).i32(layer).bool(false);
    b.i32(1).i32(2).bool(true).i32s(&[10, 20, 60]);
}

pub fn dyson_shell(b: &mut Bytes, id: i32, layer: i32) {
    b.i32(0).i32(id).i32(0).i32(layer).i32(77);
    b.i32(1).vec3(0.0, 1.0, 0.0);
    b.prefixed(&[1, 2, 3]);
    b.i32(3).i32(1);
    b.i32(0);
    b.i32(1).i32(4).i32(-4);
    for _ in 0..7 {
        b.prefixed(&[]);
    }
    b.i32(8).i32(2).i32s(&[5, 6]);
}

pub fn rocket(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32s(&[1, 1, 103]).f32(0.5).f32(200.0);
    b.vec_lf3(1.0, 2.0, 3.0).quat().vec3(0.0, 1.0, 0.0).vec3(0.0, 0.0, 1.0);
}

pub fn node_render(b: &mut Bytes, id: i32) {
    b.i32(0).i32(id).i32(1).vec3(0.0, 4000.0, 0.0).f32(0.01).quat();
}
