// 섹터 크기 (bytes), 모든 트레이스에 고정
pub const SECTOR_SIZE: f64 = 512.0;

// 요청 크기 히스토그램 구간 (KB, 오름차순)
pub const SIZE_BINS_KB: [u32; 7] = [4, 8, 16, 32, 64, 128, 256];

// 영역 통계에서 이벤트 하나당 가정하는 크기 (KB)
// 실제 요청 크기와 무관한 근사값
pub const REGION_KB_PER_EVENT: u64 = 4;

// Scatter point radius handed to the chart
pub const POINT_RADIUS: u32 = 3;
