use crate::endian::Endian;
use crate::error::{ByteArrayError, ByteArrayResult};

/// Rejects spans that overflow or extend past `limit` before any mutation
/// happens. `limit` is the written length for reads, capacity for writes.
fn check_span(offset: usize, len: usize, limit: usize) -> ByteArrayResult<()> {
    match offset.checked_add(len) {
        Some(end) if end <= limit => Ok(()),
        _ => Err(ByteArrayError::OutOfRange { offset, len, limit }),
    }
}

/// Backing region of a [`ByteArray`]: allocated by the buffer itself, or a
/// caller-supplied slice the buffer never frees.
#[derive(Debug)]
enum Storage<'a> {
    Owned(Box<[u8]>),
    Borrowed(&'a mut [u8]),
}

impl Storage<'_> {
    fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Owned(region) => region,
            Storage::Borrowed(region) => region,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::Owned(region) => region,
            Storage::Borrowed(region) => region,
        }
    }
}

/// Fixed-capacity byte buffer with bounds-checked, endian-aware accessors.
///
/// Capacity and byte order are fixed at construction; the buffer never grows.
/// A written length, tracked separately from capacity, starts at zero for
/// owned buffers (or at the caller-supplied value for [`attach`]ed ones) and
/// only ever increases. Reads are valid up to the written length, writes up
/// to capacity.
///
/// # Length tracking on positional writes
///
/// The `set_*` operations advance the written length by the value's width
/// unconditionally, even when the offset lies inside already-written data.
/// They are sequential-fill primitives, not positional overwrites: calling
/// them at arbitrary offsets makes `len()` overcount, and overcounting past
/// capacity makes later reads of the phantom tail panic at the storage
/// boundary. Callers wanting in-place patching should rewrite the region
/// through a fresh sequential fill instead.
///
/// [`attach`]: ByteArray::attach
#[derive(Debug)]
pub struct ByteArray<'a> {
    storage: Storage<'a>,
    len: usize,
    endian: Endian,
}

impl ByteArray<'static> {
    /// Creates a buffer that owns a zero-filled region of `capacity` bytes.
    ///
    /// The written length starts at zero. Returns
    /// [`ByteArrayError::AllocationFailed`] if the region cannot be
    /// reserved, without constructing a partial buffer.
    pub fn with_capacity(capacity: usize, endian: Endian) -> ByteArrayResult<ByteArray<'static>> {
        let mut region = Vec::new();
        region
            .try_reserve_exact(capacity)
            .map_err(|_| ByteArrayError::AllocationFailed(capacity))?;
        region.resize(capacity, 0u8);
        Ok(ByteArray {
            storage: Storage::Owned(region.into_boxed_slice()),
            len: 0,
            endian,
        })
    }
}

impl<'a> ByteArray<'a> {
    /// Wraps caller-owned memory without copying it.
    ///
    /// Capacity is `region.len()`, and the first `initial_len` bytes are
    /// treated as already written, exactly as the caller stored them; no
    /// byte-order conversion is applied to existing content. Dropping the
    /// buffer releases only the handle, never the region.
    ///
    /// `initial_len` is a caller contract and is deliberately not validated
    /// against the region size; passing a larger value makes reads of the
    /// excess panic at the slice boundary.
    pub fn attach(region: &'a mut [u8], initial_len: usize, endian: Endian) -> ByteArray<'a> {
        ByteArray {
            storage: Storage::Borrowed(region),
            len: initial_len,
            endian,
        }
    }

    /// Total addressable size of the backing region in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.as_slice().len()
    }

    /// Number of bytes currently written.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte order applied to multi-byte accesses, chosen at construction.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// The written prefix of the backing region.
    pub fn as_slice(&self) -> &[u8] {
        &self.storage.as_slice()[..self.len]
    }

    /// Reads the byte at `offset` from the written region.
    pub fn get_u8(&self, offset: usize) -> ByteArrayResult<u8> {
        check_span(offset, 1, self.len)?;
        Ok(self.storage.as_slice()[offset])
    }

    /// Writes a byte at `offset` and advances the written length by 1.
    pub fn set_u8(&mut self, offset: usize, value: u8) -> ByteArrayResult<()> {
        check_span(offset, 1, self.capacity())?;
        self.storage.as_mut_slice()[offset] = value;
        self.len += 1;
        Ok(())
    }

    /// Appends a byte at the written length.
    pub fn put_u8(&mut self, value: u8) -> ByteArrayResult<()> {
        self.set_u8(self.len, value)
    }

    /// Reads the 16-bit value at `offset`, decoded per the buffer's order.
    pub fn get_u16(&self, offset: usize) -> ByteArrayResult<u16> {
        check_span(offset, 2, self.len)?;
        let region = self.storage.as_slice();
        Ok(self.endian.decode_u16([region[offset], region[offset + 1]]))
    }

    /// Writes a 16-bit value at `offset`, laid out per the buffer's order,
    /// and advances the written length by 2.
    pub fn set_u16(&mut self, offset: usize, value: u16) -> ByteArrayResult<()> {
        check_span(offset, 2, self.capacity())?;
        let raw = self.endian.encode_u16(value);
        self.storage.as_mut_slice()[offset..offset + 2].copy_from_slice(&raw);
        self.len += 2;
        Ok(())
    }

    /// Appends a 16-bit value at the written length.
    pub fn put_u16(&mut self, value: u16) -> ByteArrayResult<()> {
        self.set_u16(self.len, value)
    }

    /// Reads the 32-bit value at `offset`, decoded per the buffer's order.
    pub fn get_u32(&self, offset: usize) -> ByteArrayResult<u32> {
        check_span(offset, 4, self.len)?;
        let region = self.storage.as_slice();
        Ok(self.endian.decode_u32([
            region[offset],
            region[offset + 1],
            region[offset + 2],
            region[offset + 3],
        ]))
    }

    /// Writes a 32-bit value at `offset`, laid out per the buffer's order,
    /// and advances the written length by 4.
    pub fn set_u32(&mut self, offset: usize, value: u32) -> ByteArrayResult<()> {
        check_span(offset, 4, self.capacity())?;
        let raw = self.endian.encode_u32(value);
        self.storage.as_mut_slice()[offset..offset + 4].copy_from_slice(&raw);
        self.len += 4;
        Ok(())
    }

    /// Appends a 32-bit value at the written length.
    pub fn put_u32(&mut self, value: u32) -> ByteArrayResult<()> {
        self.set_u32(self.len, value)
    }

    /// Borrows `len` bytes of the written region starting at `offset`.
    ///
    /// No copy is made; the view lives as long as the borrow of the buffer.
    pub fn get_bytes(&self, offset: usize, len: usize) -> ByteArrayResult<&[u8]> {
        check_span(offset, len, self.len)?;
        Ok(&self.storage.as_slice()[offset..offset + len])
    }

    /// Copies `src` into the buffer at `offset` and advances the written
    /// length by `src.len()`.
    pub fn set_bytes(&mut self, offset: usize, src: &[u8]) -> ByteArrayResult<()> {
        check_span(offset, src.len(), self.capacity())?;
        self.storage.as_mut_slice()[offset..offset + src.len()].copy_from_slice(src);
        self.len += src.len();
        Ok(())
    }

    /// Appends `src` at the written length.
    pub fn put_bytes(&mut self, src: &[u8]) -> ByteArrayResult<()> {
        self.set_bytes(self.len, src)
    }

    /// Appends the written bytes of `src` onto this buffer.
    ///
    /// Succeeds without touching anything when `src` is empty. Fails with no
    /// partial copy when the remaining capacity cannot hold all of `src`.
    /// Appending a buffer to itself is ruled out by the borrow checker.
    pub fn put_buffer(&mut self, src: &ByteArray<'_>) -> ByteArrayResult<()> {
        if src.is_empty() {
            return Ok(());
        }
        self.put_bytes(src.as_slice())
    }
}
