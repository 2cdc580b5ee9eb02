//! Seed dataset loaded into a fresh catalog.
//!
//! Prices are in whole rupees. Benchmarks are normalized to 0-100.

use crate::{Benchmarks, Laptop, Part, PartCategory, Screen};

#[allow(clippy::too_many_arguments)]
fn laptop(
    id: &str,
    name: &str,
    brand: &str,
    (cpu, gpu): (&str, &str),
    (ram, storage_size): (u32, u32),
    (display_size, weight): (f64, f64),
    (nits, srgb, resolution): (u32, u32, &str),
    (cpu_score, gpu_score, build_quality): (f64, f64, f64),
    price: u64,
    image: &str,
) -> Laptop {
    Laptop {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        cpu: cpu.to_string(),
        gpu: gpu.to_string(),
        ram,
        storage_size,
        display_size,
        weight,
        screen: Screen {
            nits,
            srgb,
            resolution: resolution.to_string(),
        },
        benchmarks: Benchmarks {
            cpu: cpu_score,
            gpu: gpu_score,
            build_quality,
        },
        price,
        image: image.to_string(),
    }
}

/// The fixed laptop list.
pub(crate) fn seed_laptops() -> Vec<Laptop> {
    vec![
        laptop(
            "1",
            "MacBook Air M3 (13-inch)",
            "Apple",
            ("Apple M3 (8-core)", "M3 10-core GPU"),
            (16, 512),
            (13.6, 1.24),
            (500, 100, "2560 x 1664"),
            (85.0, 72.0, 98.0),
            114900,
            "https://cdn.mos.cms.futurecdn.net/v2/t:0,l:328,cw:2099,ch:1181,q:80,w:2099/FfWtj8AdVGanoRqUPFt6jT.jpg",
        ),
        laptop(
            "2",
            "ASUS Vivobook 16X",
            "ASUS",
            ("Intel Core i5-13500H", "RTX 3050 (50W)"),
            (16, 512),
            (16.0, 1.80),
            (300, 45, "1920 x 1200"),
            (75.0, 60.0, 70.0),
            68990,
            "https://images.unsplash.com/photo-1588872657578-7efd1f1555ed?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "3",
            "HP Victus 15",
            "HP",
            ("AMD Ryzen 5 7535HS", "RTX 2050"),
            (16, 512),
            (15.6, 2.29),
            (250, 45, "1920 x 1080"),
            (68.0, 45.0, 65.0),
            54990,
            "https://in-files.apjonlinecdn.com/landingpages/npi/hp-victus-15-laptop/intel/images/w100_slide1_v2.png",
        ),
        laptop(
            "4",
            "Lenovo Legion Slim 5i",
            "Lenovo",
            ("Intel Core i7-13700H", "RTX 4060 (125W)"),
            (16, 1024),
            (16.0, 2.40),
            (500, 100, "2560 x 1600"),
            (88.0, 82.0, 88.0),
            132990,
            "https://images.unsplash.com/photo-1603302576837-37561b2e2302?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "5",
            "Razer Blade 16 (2024)",
            "Razer",
            ("Intel Core i9-14900HX", "RTX 4090 (175W)"),
            (32, 2048),
            (16.0, 2.45),
            (1000, 100, "3840 x 2400 (Mini-LED)"),
            (98.0, 99.0, 95.0),
            459990,
            "https://images.unsplash.com/photo-1593642702821-c8da6771f0c6?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "6",
            "Dell XPS 15 9530",
            "Dell",
            ("Intel Core i9-13900H", "RTX 4070"),
            (32, 1024),
            (15.6, 1.92),
            (500, 100, "3456 x 2160 (OLED)"),
            (92.0, 85.0, 96.0),
            284990,
            "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "7",
            "ASUS ROG Zephyrus G14",
            "ASUS",
            ("AMD Ryzen 9 8945HS", "RTX 4070 (90W)"),
            (32, 1024),
            (14.0, 1.50),
            (500, 100, "2880 x 1800 (OLED)"),
            (94.0, 88.0, 90.0),
            189990,
            "https://images.unsplash.com/photo-1629131726692-1accd0c53ce0?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "8",
            "HP Spectre x360 14",
            "HP",
            ("Intel Core Ultra 7 155H", "Intel Arc Graphics"),
            (16, 1024),
            (14.0, 1.45),
            (400, 100, "2880 x 1920 (OLED)"),
            (84.0, 55.0, 94.0),
            164990,
            "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "9",
            "Acer Swift Go 14",
            "Acer",
            ("Intel Core Ultra 5 125H", "Intel Arc Graphics"),
            (16, 512),
            (14.0, 1.32),
            (400, 100, "2880 x 1800 (OLED)"),
            (80.0, 50.0, 78.0),
            79990,
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "10",
            "MSI Titan GT77 HX",
            "MSI",
            ("Intel Core i9-13980HX", "RTX 4090 (175W)"),
            (64, 4096),
            (17.3, 3.30),
            (1000, 100, "3840 x 2160 (Mini-LED)"),
            (99.0, 100.0, 88.0),
            549990,
            "https://rukminim2.flixcart.com/image/480/640/xif0q/computer/3/t/j/-original-imahcyp7p4jvn3d4.jpeg?q=90",
        ),
        laptop(
            "11",
            "ASUS Zenbook 14 OLED",
            "ASUS",
            ("Intel Core Ultra 7 155H", "Intel Arc Graphics"),
            (16, 1024),
            (14.0, 1.20),
            (600, 100, "2880 x 1800 (OLED)"),
            (85.0, 56.0, 91.0),
            114990,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "12",
            "Microsoft Surface Laptop 5",
            "Microsoft",
            ("Intel Core i7-1255U", "Intel Iris Xe"),
            (16, 512),
            (13.5, 1.27),
            (400, 100, "2256 x 1504"),
            (72.0, 35.0, 93.0),
            139990,
            "https://www.express-service.com.ua/upload/iblock/dfa/wvj42vk1tat6rp756b9ys0985kzbo53d/6523e085b47f2_1724564_zoom.jpg",
        ),
        laptop(
            "13",
            "Lenovo Yoga Slim 7i Carbon",
            "Lenovo",
            ("Intel Core i7-1360P", "Intel Iris Xe"),
            (16, 512),
            (13.3, 0.97),
            (400, 100, "2560 x 1600"),
            (78.0, 40.0, 89.0),
            124990,
            "https://images.unsplash.com/photo-1525547719571-a2d4ac8945e2?auto=format&fit=crop&q=80&w=600&h=400",
        ),
        laptop(
            "14",
            "HP Omen 16",
            "HP",
            ("Intel Core i7-14700HX", "RTX 4070 (140W)"),
            (16, 1024),
            (16.1, 2.37),
            (300, 100, "2560 x 1440"),
            (94.0, 90.0, 82.0),
            159990,
            "https://www.hp.com/content/dam/sites/omen/worldwide/laptops/2023-omen-16-intel/hero-1-v2-2x.png",
        ),
        laptop(
            "15",
            "Samsung Galaxy Book4 Ultra",
            "Samsung",
            ("Intel Core Ultra 9 185H", "RTX 4070"),
            (32, 1024),
            (16.0, 1.86),
            (400, 120, "2880 x 1800 (AMOLED)"),
            (96.0, 86.0, 92.0),
            249990,
            "https://images.unsplash.com/photo-1531297484001-80022131f5a1?auto=format&fit=crop&q=80&w=600&h=400",
        ),
    ]
}

/// The fixed parts list.
pub(crate) fn seed_parts() -> Vec<Part> {
    vec![
        // CPUs - Intel
        Part::new("cpu-i9-14900k", "Intel Core i9-14900K", PartCategory::Cpu, 54900)
            .with_tdp(125)
            .with_socket("LGA1700"),
        Part::new("cpu-i7-14700k", "Intel Core i7-14700K", PartCategory::Cpu, 38900)
            .with_tdp(125)
            .with_socket("LGA1700"),
        Part::new("cpu-i5-13600k", "Intel Core i5-13600K", PartCategory::Cpu, 29500)
            .with_tdp(125)
            .with_socket("LGA1700"),
        Part::new("cpu-i5-12400f", "Intel Core i5-12400F", PartCategory::Cpu, 12800)
            .with_tdp(65)
            .with_socket("LGA1700"),

        // CPUs - AMD
        Part::new("cpu-r9-7950x3d", "AMD Ryzen 9 7950X3D", PartCategory::Cpu, 62500)
            .with_tdp(120)
            .with_socket("AM5"),
        Part::new("cpu-r7-7800x3d", "AMD Ryzen 7 7800X3D", PartCategory::Cpu, 38500)
            .with_tdp(120)
            .with_socket("AM5"),
        Part::new("cpu-r7-7700x", "AMD Ryzen 7 7700X", PartCategory::Cpu, 28900)
            .with_tdp(105)
            .with_socket("AM5"),
        Part::new("cpu-r5-7600", "AMD Ryzen 5 7600", PartCategory::Cpu, 18500)
            .with_tdp(65)
            .with_socket("AM5"),

        // Motherboards - LGA1700
        Part::new("mobo-z790-hero", "ASUS ROG Maximus Z790 Hero", PartCategory::Motherboard, 62000)
            .with_socket("LGA1700"),
        Part::new("mobo-z790-elite", "Gigabyte Z790 AORUS ELITE AX", PartCategory::Motherboard, 28900)
            .with_socket("LGA1700"),
        Part::new("mobo-b760-wifi", "ASUS Prime B760M-A WiFi", PartCategory::Motherboard, 15500)
            .with_socket("LGA1700"),
        Part::new("mobo-h610m", "MSI PRO H610M-E DDR4", PartCategory::Motherboard, 7200)
            .with_socket("LGA1700"),

        // Motherboards - AM5
        Part::new("mobo-x670e-taichi", "ASRock X670E Taichi", PartCategory::Motherboard, 48500)
            .with_socket("AM5"),
        Part::new("mobo-b650-tomahawk", "MSI MAG B650 Tomahawk WiFi", PartCategory::Motherboard, 21500)
            .with_socket("AM5"),
        Part::new("mobo-b650m-ds3h", "Gigabyte B650M DS3H", PartCategory::Motherboard, 14800)
            .with_socket("AM5"),

        // GPUs - NVIDIA
        Part::new("gpu-rtx-4090", "NVIDIA RTX 4090 24GB", PartCategory::Gpu, 185000).with_tdp(450),
        Part::new("gpu-rtx-4080-super", "NVIDIA RTX 4080 Super", PartCategory::Gpu, 105000)
            .with_tdp(320),
        Part::new("gpu-rtx-4070-ti-super", "NVIDIA RTX 4070 Ti Super", PartCategory::Gpu, 79500)
            .with_tdp(285),
        Part::new("gpu-rtx-4070-super", "NVIDIA RTX 4070 Super", PartCategory::Gpu, 59900)
            .with_tdp(220),
        Part::new("gpu-rtx-4060-ti", "NVIDIA RTX 4060 Ti 8GB", PartCategory::Gpu, 38500)
            .with_tdp(160),
        Part::new("gpu-rtx-3060", "NVIDIA RTX 3060 12GB", PartCategory::Gpu, 25500).with_tdp(170),

        // GPUs - AMD
        Part::new("gpu-rx-7900-xtx", "AMD Radeon RX 7900 XTX", PartCategory::Gpu, 92000)
            .with_tdp(355),
        Part::new("gpu-rx-7800-xt", "AMD Radeon RX 7800 XT", PartCategory::Gpu, 49900)
            .with_tdp(263),
        Part::new("gpu-rx-7600-xt", "AMD Radeon RX 7600 XT", PartCategory::Gpu, 32500)
            .with_tdp(190),

        // RAM
        Part::new("ram-ddr5-64gb", "G.Skill Trident Z5 RGB 64GB DDR5 6000", PartCategory::Ram, 22500)
            .with_tdp(10),
        Part::new("ram-ddr5-32gb", "Corsair Vengeance 32GB DDR5 6000MHz", PartCategory::Ram, 11000)
            .with_tdp(5),
        Part::new("ram-ddr5-16gb", "Kingston Fury Beast 16GB DDR5 5200", PartCategory::Ram, 5800)
            .with_tdp(5),
        Part::new("ram-ddr4-16gb", "Corsair Vengeance LPX 16GB DDR4 3200", PartCategory::Ram, 3800)
            .with_tdp(5),

        // Cooling
        Part::new("cool-kraken-360", "NZXT Kraken Elite 360 RGB", PartCategory::Cooling, 24500)
            .with_tdp(15),
        Part::new("cool-noctua-d15", "Noctua NH-D15 chromax.black", PartCategory::Cooling, 9800)
            .with_tdp(5),
        Part::new("cool-ak620", "Deepcool AK620 Digital", PartCategory::Cooling, 6500).with_tdp(5),
        Part::new("cool-hyper-212", "Cooler Master Hyper 212 Halo", PartCategory::Cooling, 3200)
            .with_tdp(5),

        // Storage
        Part::new("stor-990-pro-2tb", "Samsung 990 Pro 2TB NVMe", PartCategory::Storage, 17500)
            .with_tdp(8),
        Part::new("stor-crucial-t700-2tb", "Crucial T700 2TB Gen5", PartCategory::Storage, 28500)
            .with_tdp(12),
        Part::new("stor-sn850x-1tb", "WD Black SN850X 1TB", PartCategory::Storage, 9200)
            .with_tdp(8),
        Part::new("stor-crucial-p3-1tb", "Crucial P3 1TB NVMe", PartCategory::Storage, 5200)
            .with_tdp(5),

        // PSUs
        Part::new("psu-thor-1200", "ASUS ROG Thor 1200W Platinum II", PartCategory::Psu, 32500)
            .with_wattage(1200),
        Part::new("psu-rm1000x", "Corsair RM1000x Shift", PartCategory::Psu, 17500)
            .with_wattage(1000),
        Part::new("psu-evga-850", "EVGA SuperNOVA 850G+", PartCategory::Psu, 12500)
            .with_wattage(850),
        Part::new("psu-cv650", "Corsair CV650 650W 80 Plus Bronze", PartCategory::Psu, 4800)
            .with_wattage(650),

        // Cases
        Part::new("case-h9-elite", "NZXT H9 Elite", PartCategory::Case, 21500),
        Part::new("case-o11-evo", "Lian Li O11 Dynamic EVO", PartCategory::Case, 16500),
        Part::new("case-north", "Fractal Design North", PartCategory::Case, 14500),
        Part::new("case-4000d", "Corsair 4000D Airflow", PartCategory::Case, 8900),
        Part::new("case-h5-flow", "NZXT H5 Flow", PartCategory::Case, 7800),
    ]
}
