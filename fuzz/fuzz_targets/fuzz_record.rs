#![no_main]
use dsv::{Decode, Reader};
use libfuzzer_sys::fuzz_target;

// Records deep in the graph that carry conditional tails and gated pools
fuzz_target!(|data: &[u8]| {
    let _ = dsv::AssemblerComponent::decode(&mut Reader::new(data));
    let _ = dsv::LabComponent::decode(&mut Reader::new(data));
    let _ = dsv::StationComponent::decode(&mut Reader::new(data));
    let _ = dsv::PowerSystem::decode(&mut Reader::new(data));
    let _ = dsv::CargoTraffic::decode(&mut Reader::new(data));
    let _ = dsv::DysonSphere::decode(&mut Reader::new(data));
});
