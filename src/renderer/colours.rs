use image::Rgba;

pub(crate) struct Colours {
    pub header: Rgba<u8>,
    pub text: Rgba<u8>,
    pub water: Rgba<u8>,
    pub temperature: Rgba<u8>,
    pub stats: Rgba<u8>,
    pub plant: Rgba<u8>,
    pub alert: Rgba<u8>,
    pub chart: Rgba<u8>,
    pub muted: Rgba<u8>,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            header: Rgba([114, 159, 207, 255]),      // Steel blue - for headers
            text: Rgba([238, 238, 236, 255]),        // Off-white - for general text
            water: Rgba([59, 130, 246, 255]),        // Bright blue - for the tank bar
            temperature: Rgba([245, 121, 0, 255]),   // Burnt orange - for temperature
            stats: Rgba([237, 212, 0, 255]),         // Golden yellow - for statistics
            plant: Rgba([87, 174, 36, 255]),         // Vibrant green - for plant/CO2 info
            alert: Rgba([204, 0, 0, 255]),           // Crimson - for the low-water alert
            chart: Rgba([59, 130, 246, 255]),        // Bright blue - for the volume chart
            muted: Rgba([186, 189, 182, 255]),       // Silver gray - for table headers
        }
    }
}
