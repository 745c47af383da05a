//! Static cooking guide served alongside the timer

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GuideEntry {
    pub question: &'static str,
    pub answer: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct GuideCondition {
    pub icon: &'static str,
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuideStep {
    pub number: u8,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CookingGuide {
    pub title: &'static str,
    pub faq: &'static [GuideEntry],
    pub conditions: &'static [GuideCondition],
    pub steps: &'static [GuideStep],
    pub pro_tips: &'static [&'static str],
}

pub fn cooking_guide() -> &'static CookingGuide {
    &GUIDE
}

static GUIDE: CookingGuide = CookingGuide {
    title: "Panduan Memasak Telur",
    faq: &[
        GuideEntry {
            question: "Bagaimana cara memasak telur lembek (soft boiled)?",
            answer: &[
                "Waktu: 6-7 menit",
                "Hasil: Putih telur matang, kuning telur cair",
                "Tips: Langsung masukkan ke air es setelah matang untuk menghentikan proses memasak. Kupas dengan hati-hati karena putih telur masih lembut.",
            ],
        },
        GuideEntry {
            question: "Bagaimana cara memasak telur medium?",
            answer: &[
                "Waktu: 8-9 menit",
                "Hasil: Putih telur matang, kuning telur setengah cair (jammy)",
                "Tips: Ideal untuk ramen atau salad. Kuning telur akan berwarna orange keemasan dan tekstur creamy.",
            ],
        },
        GuideEntry {
            question: "Bagaimana cara memasak telur matang (hard boiled)?",
            answer: &[
                "Waktu: 10-12 menit",
                "Hasil: Putih dan kuning telur matang sempurna",
                "Tips: Jangan terlalu lama agar kuning telur tidak berwarna kehijauan. Cocok untuk telur devil atau sandwich.",
            ],
        },
        GuideEntry {
            question: "Apakah suhu awal telur berpengaruh?",
            answer: &[
                "Ya, sangat berpengaruh. Telur yang langsung dari kulkas membutuhkan waktu lebih lama sekitar 1-2 menit. Sebaiknya diamkan telur di suhu ruang selama 10-15 menit sebelum direbus untuk hasil yang konsisten.",
            ],
        },
        GuideEntry {
            question: "Tips agar telur tidak retak saat direbus",
            answer: &[
                "Masukkan telur perlahan ke air mendidih menggunakan sendok",
                "Gunakan api sedang, bukan api besar",
                "Pastikan air cukup untuk menutupi telur sepenuhnya",
                "Buat lubang kecil di ujung telur dengan jarum (opsional)",
            ],
        },
        GuideEntry {
            question: "Bagaimana cara mengupas telur dengan mudah?",
            answer: &[
                "Langsung masukkan telur ke air es setelah matang",
                "Diamkan dalam air es selama 2-3 menit",
                "Ketuk-ketuk seluruh permukaan telur hingga retak",
                "Mulai kupas dari ujung yang lebih besar",
                "Kupas di bawah air mengalir untuk hasil yang lebih mudah",
            ],
        },
    ],
    conditions: &[
        GuideCondition { icon: "🌡️", name: "Suhu Air Ideal", value: "100°C (Mendidih)" },
        GuideCondition { icon: "🥚", name: "Suhu Awal Telur", value: "Suhu Ruang" },
        GuideCondition { icon: "🍳", name: "Ukuran Panci", value: "Sedang" },
    ],
    steps: &[
        GuideStep {
            number: 1,
            title: "Persiapan",
            detail: "Keluarkan telur dari kulkas 10-15 menit sebelum memasak",
        },
        GuideStep {
            number: 2,
            title: "Didihkan Air",
            detail: "Isi panci dengan air secukupnya, didihkan dengan api besar",
        },
        GuideStep {
            number: 3,
            title: "Masukkan Telur",
            detail: "Masukkan telur perlahan dengan sendok, kecilkan api menjadi sedang",
        },
        GuideStep {
            number: 4,
            title: "Timer",
            detail: "Nyalakan timer sesuai tingkat kematangan yang diinginkan",
        },
        GuideStep {
            number: 5,
            title: "Air Es",
            detail: "Siapkan mangkuk berisi air es untuk menghentikan proses memasak",
        },
        GuideStep {
            number: 6,
            title: "Selesai",
            detail: "Angkat telur dan langsung masukkan ke air es, diamkan 2-3 menit",
        },
    ],
    pro_tips: &[
        "Gunakan telur yang sudah berumur 7-10 hari untuk hasil kupas yang lebih mudah",
        "Tambahkan 1 sdm cuka ke air rebusan untuk mencegah telur retak",
        "Simpan telur rebus di kulkas maksimal 1 minggu",
        "Untuk telur lembek, konsumsi segera setelah matang",
    ],
};
